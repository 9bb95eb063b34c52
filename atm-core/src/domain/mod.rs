//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod account;
pub mod credential;
pub mod menu;
pub mod result;

pub use account::Account;
pub use credential::{Argon2Params, Credential, CredentialScheme};
pub use menu::{MainMenuChoice, SessionMenuChoice};
