//! ATM Core - ledger and authentication logic for the ATM simulator
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: Accounts, PIN credentials, menu choices, errors
//! - **ports**: Trait definitions for external dependencies (Terminal)
//! - **services**: Ledger, session menu controller, event logging
//! - **adapters**: Concrete port implementations (scripted terminal)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use config::Config;
use services::{AtmController, EntryPoint, Ledger, LoggingService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Account, CredentialScheme, MainMenuChoice, SessionMenuChoice};
pub use ports::{Message, Terminal};
pub use services::{LogEntry, LogEvent, Session};

/// Main context for ATM operations
///
/// Owns the ledger for the life of the process together with the
/// configuration and event log. Independent contexts share nothing.
pub struct AtmContext {
    pub config: Config,
    pub ledger: Ledger,
    pub logger: LoggingService,
}

impl AtmContext {
    pub fn new(config: Config, entry_point: EntryPoint) -> Self {
        let ledger = Ledger::new(config.credential_scheme());
        let logger = LoggingService::new(entry_point, env!("CARGO_PKG_VERSION"));
        Self { config, ledger, logger }
    }

    /// Controller borrowing this context's ledger, config and logger
    pub fn controller(&mut self) -> AtmController<'_> {
        AtmController::new(&mut self.ledger, &self.config, &self.logger)
    }

    /// Run the interactive menu loop on the given terminal
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        self.controller().run(terminal)
    }
}
