//! Configuration management
//!
//! Settings are read from a JSON file:
//! ```json
//! {
//!   "credentialScheme": "shift",
//!   "argon2": { "timeCost": 3, "memoryCost": 65536, "parallelism": 4, "hashLen": 32 },
//!   "currencySymbol": "$",
//!   "decimalPlaces": 2
//! }
//! ```
//! Every field is optional. A missing file yields the defaults.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{Argon2Params, CredentialScheme};

/// Default number of decimal places when rendering amounts
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Name of the credential scheme as written in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    #[default]
    Shift,
    Argon2,
}

/// ATM configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub credential_scheme: SchemeName,
    #[serde(default)]
    pub argon2: Argon2Params,
    #[serde(default)]
    pub currency_symbol: String,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential_scheme: SchemeName::default(),
            argon2: Argon2Params::default(),
            currency_symbol: String::new(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl Config {
    /// Load config from a settings file, falling back to defaults if it
    /// does not exist
    pub fn load(settings_path: &Path) -> Result<Self> {
        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(settings_path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::config(format!("{}: {}", settings_path.display(), e))
        })
    }

    /// Save config to a settings file, creating parent directories
    pub fn save(&self, settings_path: &Path) -> Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, content)?;
        Ok(())
    }

    /// Switch new accounts to the salted Argon2id scheme
    pub fn enable_hardened_credentials(&mut self) {
        self.credential_scheme = SchemeName::Argon2;
    }

    /// The scheme the ledger should use for new accounts
    pub fn credential_scheme(&self) -> CredentialScheme {
        match self.credential_scheme {
            SchemeName::Shift => CredentialScheme::Shift,
            SchemeName::Argon2 => CredentialScheme::Argon2(self.argon2),
        }
    }

    /// Render an amount for display
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(self.decimal_places);
        format!(
            "{}{:.*}",
            self.currency_symbol, self.decimal_places as usize, rounded
        )
    }
}
