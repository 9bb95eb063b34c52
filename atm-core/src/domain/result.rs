//! Result and error types for the core library

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
///
/// Every domain variant is recoverable: the controller reports it and
/// returns to the enclosing menu with the ledger unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Account with this number already exists: {0}")]
    DuplicateAccount(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid PIN")]
    InvalidCredential,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    #[error("Invalid menu choice: {0}")]
    InvalidMenuChoice(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable, data-free name of the error for event logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateAccount(_) => "duplicate_account",
            Self::AccountNotFound(_) => "account_not_found",
            Self::InvalidCredential => "invalid_credential",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InvalidMenuChoice(_) => "invalid_menu_choice",
            Self::Credential(_) => "credential",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }

    /// Whether this error is a domain outcome the user can recover from
    /// (as opposed to a failure of the terminal or the settings file).
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::Json(_) | Self::Config(_) | Self::Credential(_)
        )
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result for JSON rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_operation_result_ok() {
        let result: OperationResult<i32> = OperationResult::ok(42);
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_operation_result_fail() {
        let err = Error::InsufficientFunds {
            requested: dec!(200),
            available: dec!(150),
        };
        let result: OperationResult<Decimal> = OperationResult::fail(err.to_string());
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Insufficient funds"));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::InvalidCredential.is_recoverable());
        assert!(Error::invalid_amount("-5").is_recoverable());
        assert!(!Error::config("bad settings").is_recoverable());
        assert!(!Error::Credential("bad argon2 params".to_string()).is_recoverable());
    }

    #[test]
    fn test_kind_carries_no_account_data() {
        let err = Error::AccountNotFound("1001".to_string());
        assert_eq!(err.kind(), "account_not_found");
        assert!(err.to_string().contains("1001"));
        assert!(!err.kind().contains("1001"));
    }
}
