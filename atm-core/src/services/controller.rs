//! ATM controller - the menu-driven session loop
//!
//! Drives the user through the top-level menu and, after a successful PIN
//! check, the in-session menu:
//!
//! ```text
//! Start -> AccountLookup -> PinPrompt -> Authenticated -> {Inquiry, Deposit, Withdraw}* -> Exit
//!                |               |
//!            NotFound         Invalid
//! ```
//!
//! Domain errors never escape the loop. They are shown to the user, logged
//! by kind, and control returns to the enclosing menu. Terminal failures and
//! credential setup failures are not recoverable and end the run.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{MainMenuChoice, SessionMenuChoice};
use crate::ports::{Message, Terminal};
use crate::services::ledger::{Ledger, Session};
use crate::services::logging::LoggingService;

pub const MAIN_MENU_TITLE: &str = "*** ATM Controller Menu ***";
pub const CHOICE_PROMPT: &str = "Enter your choice";
pub const GOODBYE: &str = "Thank you for using the ATM Controller. Goodbye!";

/// Whether the enclosing loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The input stream ended; stop without further prompts
    Quit,
}

/// Menu loop over one ledger
pub struct AtmController<'a> {
    ledger: &'a mut Ledger,
    config: &'a Config,
    logger: &'a LoggingService,
}

/// Accepts plain decimals and exponent forms such as `1e3`
fn parse_amount(input: &str) -> Result<Decimal> {
    let input = input.trim();
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| Error::invalid_amount(format!("not a number: {}", input)))
}

fn main_menu() -> Message {
    Message::Menu {
        title: Some(MAIN_MENU_TITLE.to_string()),
        options: MainMenuChoice::ALL.iter().map(|c| c.to_string()).collect(),
    }
}

fn session_menu() -> Message {
    Message::Menu {
        title: None,
        options: SessionMenuChoice::ALL.iter().map(|c| c.to_string()).collect(),
    }
}

impl<'a> AtmController<'a> {
    pub fn new(ledger: &'a mut Ledger, config: &'a Config, logger: &'a LoggingService) -> Self {
        Self { ledger, config, logger }
    }

    /// Run the top-level menu until the user exits or input ends
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        self.logger.log_event("atm_started");

        loop {
            terminal.show(&main_menu())?;
            let Some(input) = terminal.prompt(CHOICE_PROMPT)? else {
                self.logger.log_event("input_closed");
                break;
            };

            let flow = match input.parse::<MainMenuChoice>() {
                Ok(MainMenuChoice::CreateAccount) => self.create_account_flow(terminal)?,
                Ok(MainMenuChoice::AccessAccount) => self.access_account_flow(terminal)?,
                Ok(MainMenuChoice::Exit) => {
                    terminal.show(&Message::info(GOODBYE))?;
                    break;
                }
                Err(e) => {
                    self.logger
                        .log_error("invalid_menu_choice", e.kind(), Some("main_menu"));
                    terminal.show(&Message::error("Invalid choice. Please try again."))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                self.logger.log_event("input_closed");
                break;
            }
        }

        self.logger.log_event("atm_stopped");
        Ok(())
    }

    /// Prompt for the new account's details and add it to the ledger
    pub fn create_account_flow(&mut self, terminal: &mut dyn Terminal) -> Result<Flow> {
        self.logger.log_command("create_account");

        let Some(identifier) = terminal.prompt("Enter account number")? else {
            return Ok(Flow::Quit);
        };
        let Some(holder_name) = terminal.prompt("Enter account holder's name")? else {
            return Ok(Flow::Quit);
        };
        let Some(balance_input) = terminal.prompt("Enter initial balance")? else {
            return Ok(Flow::Quit);
        };
        let initial_balance = match parse_amount(&balance_input) {
            Ok(amount) => amount,
            Err(e) => {
                self.logger
                    .log_error("account_create_failed", e.kind(), Some("create_account"));
                terminal.show(&Message::error("Invalid initial balance."))?;
                return Ok(Flow::Continue);
            }
        };
        let Some(pin) = terminal.prompt_secret("Set a 4-digit PIN")? else {
            return Ok(Flow::Quit);
        };

        match self.ledger.create_account(
            identifier.trim(),
            holder_name.trim(),
            initial_balance,
            pin.trim(),
        ) {
            Ok(()) => {
                self.logger.log_event("account_created");
                terminal.show(&Message::success("Account created successfully!"))?;
            }
            Err(e) if !e.is_recoverable() => {
                self.logger
                    .log_error("account_create_failed", e.kind(), Some("create_account"));
                return Err(e);
            }
            Err(e) => {
                self.logger
                    .log_error("account_create_failed", e.kind(), Some("create_account"));
                let text = match e {
                    Error::DuplicateAccount(_) => "Account with this number already exists.".to_string(),
                    other => other.to_string(),
                };
                terminal.show(&Message::error(text))?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Look up an account, check its PIN, then run the in-session menu
    pub fn access_account_flow(&mut self, terminal: &mut dyn Terminal) -> Result<Flow> {
        self.logger.log_command("access_account");

        let Some(identifier) = terminal.prompt("Enter account number")? else {
            return Ok(Flow::Quit);
        };
        let identifier = identifier.trim();

        if let Err(e) = self.ledger.find_account(identifier) {
            self.logger.log_error("auth_failed", e.kind(), Some("access_account"));
            terminal.show(&Message::error("Account not found."))?;
            return Ok(Flow::Continue);
        }

        let Some(pin) = terminal.prompt_secret("Enter PIN")? else {
            return Ok(Flow::Quit);
        };

        let mut session = match self.ledger.authenticate(identifier, pin.trim()) {
            Ok(session) => session,
            Err(e) => {
                self.logger.log_error("auth_failed", e.kind(), Some("access_account"));
                let text = match e {
                    Error::InvalidCredential => "Invalid PIN. Access denied.",
                    _ => "Account not found.",
                };
                terminal.show(&Message::error(text))?;
                return Ok(Flow::Continue);
            }
        };

        self.logger.log_event("session_started");
        let flow = run_session(&mut session, self.config, self.logger, terminal)?;
        self.logger.log_event("session_ended");
        Ok(flow)
    }
}

/// In-session menu loop; only the exit choice (or end of input) leaves it
fn run_session(
    session: &mut Session<'_>,
    config: &Config,
    logger: &LoggingService,
    terminal: &mut dyn Terminal,
) -> Result<Flow> {
    loop {
        terminal.show(&session_menu())?;
        let Some(input) = terminal.prompt(CHOICE_PROMPT)? else {
            return Ok(Flow::Quit);
        };

        match input.parse::<SessionMenuChoice>() {
            Ok(SessionMenuChoice::BalanceInquiry) => {
                logger.log_command("balance_inquiry");
                terminal.show(&Message::info(format!(
                    "Current balance: {}",
                    config.format_amount(session.balance())
                )))?;
            }
            Ok(SessionMenuChoice::Deposit) => {
                logger.log_command("deposit");
                let Some(amount) = terminal.prompt("Enter amount to deposit")? else {
                    return Ok(Flow::Quit);
                };
                match parse_amount(&amount).and_then(|a| session.deposit(a)) {
                    Ok(balance) => {
                        logger.log_event("deposit_completed");
                        terminal.show(&Message::success(format!(
                            "Deposit successful! New balance: {}",
                            config.format_amount(balance)
                        )))?;
                    }
                    Err(e) if !e.is_recoverable() => return Err(e),
                    Err(e) => {
                        logger.log_error("deposit_failed", e.kind(), Some("deposit"));
                        terminal.show(&Message::error("Invalid deposit amount."))?;
                    }
                }
            }
            Ok(SessionMenuChoice::Withdraw) => {
                logger.log_command("withdraw");
                let Some(amount) = terminal.prompt("Enter amount to withdraw")? else {
                    return Ok(Flow::Quit);
                };
                match parse_amount(&amount).and_then(|a| session.withdraw(a)) {
                    Ok(balance) => {
                        logger.log_event("withdraw_completed");
                        terminal.show(&Message::success(format!(
                            "Withdrawal successful! New balance: {}",
                            config.format_amount(balance)
                        )))?;
                    }
                    Err(e) if !e.is_recoverable() => return Err(e),
                    Err(e) => {
                        logger.log_error("withdraw_failed", e.kind(), Some("withdraw"));
                        let text = match e {
                            Error::InsufficientFunds { available, .. } => format!(
                                "Insufficient funds for withdrawal. Current balance: {}",
                                config.format_amount(available)
                            ),
                            _ => "Invalid withdrawal amount.".to_string(),
                        };
                        terminal.show(&Message::error(text))?;
                    }
                }
            }
            Ok(SessionMenuChoice::Exit) => {
                terminal.show(&Message::info("Exiting..."))?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                logger.log_error("invalid_menu_choice", e.kind(), Some("session_menu"));
                terminal.show(&Message::error("Invalid choice. Try again."))?;
            }
        }
    }
}
