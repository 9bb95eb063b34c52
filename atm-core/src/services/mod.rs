//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

pub mod controller;
pub mod ledger;
pub mod logging;

pub use controller::{AtmController, Flow};
pub use ledger::{Ledger, Session};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
