//! Account domain model

use rust_decimal::Decimal;
use serde::Serialize;

use super::credential::Credential;
use super::result::{Error, Result};

/// A single ledger entry: one holder's funds and PIN credential
///
/// Accounts are only constructed and mutated by the ledger. The
/// credential is skipped on serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    identifier: String,
    holder_name: String,
    balance: Decimal,
    #[serde(skip)]
    credential: Credential,
}

impl Account {
    /// The initial balance is taken as-is, sign included.
    pub(crate) fn new(
        identifier: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        credential: Credential,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
            credential,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn credential_scheme(&self) -> &'static str {
        self.credential.scheme_name()
    }

    /// Compare a candidate PIN against the stored credential
    pub fn verify_credential(&self, pin: &str) -> bool {
        self.credential.verify(pin)
    }

    /// Add funds. Returns the new balance.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_amount(format!(
                "deposit must be positive, got {}",
                amount
            )));
        }
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            Error::invalid_amount(format!("deposit of {} would overflow the balance", amount))
        })?;
        Ok(self.balance)
    }

    /// Remove funds. Returns the new balance.
    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid_amount(format!(
                "withdrawal must be positive, got {}",
                amount
            )));
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
