//! Ledger service - account registry and PIN-gated sessions

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Credential, CredentialScheme};

/// Registry of accounts keyed by identifier
///
/// The ledger owns every account. Callers get read-only access through
/// [`Ledger::find_account`] and mutable access only through a [`Session`]
/// obtained from [`Ledger::authenticate`].
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
    scheme: CredentialScheme,
}

impl Ledger {
    pub fn new(scheme: CredentialScheme) -> Self {
        Self {
            accounts: HashMap::new(),
            scheme,
        }
    }

    /// Create and store a new account
    ///
    /// Fails with [`Error::DuplicateAccount`] if the identifier is taken;
    /// the existing account is left untouched.
    pub fn create_account(
        &mut self,
        identifier: &str,
        holder_name: &str,
        initial_balance: Decimal,
        pin: &str,
    ) -> Result<()> {
        if self.accounts.contains_key(identifier) {
            return Err(Error::DuplicateAccount(identifier.to_string()));
        }

        let credential = Credential::new(pin, &self.scheme)?;
        let account = Account::new(identifier, holder_name, initial_balance, credential);
        self.accounts.insert(identifier.to_string(), account);
        Ok(())
    }

    /// Look up an account by identifier
    pub fn find_account(&self, identifier: &str) -> Result<&Account> {
        self.accounts
            .get(identifier)
            .ok_or_else(|| Error::AccountNotFound(identifier.to_string()))
    }

    /// Verify a PIN and open a session on the account
    pub fn authenticate(&mut self, identifier: &str, pin: &str) -> Result<Session<'_>> {
        let account = self
            .accounts
            .get_mut(identifier)
            .ok_or_else(|| Error::AccountNotFound(identifier.to_string()))?;

        if !account.verify_credential(pin) {
            return Err(Error::InvalidCredential);
        }

        Ok(Session { account })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.accounts.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Authenticated access to a single account
///
/// Holds the ledger's account exclusively until dropped, so the ledger
/// cannot be mutated underneath a live session.
#[derive(Debug)]
pub struct Session<'a> {
    account: &'a mut Account,
}

impl Session<'_> {
    pub fn identifier(&self) -> &str {
        self.account.identifier()
    }

    pub fn holder_name(&self) -> &str {
        self.account.holder_name()
    }

    /// Balance inquiry
    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal> {
        self.account.withdraw(amount)
    }
}
