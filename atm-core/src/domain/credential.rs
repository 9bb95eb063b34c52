//! PIN credential models
//!
//! Two schemes are supported:
//!
//! - **shift**: every byte of the PIN is offset by [`SHIFT_OFFSET`]. This keeps
//!   the PIN out of plain text in memory but is fully reversible. It is not
//!   encryption in any meaningful sense.
//! - **argon2**: a salted Argon2id digest. One-way; verification recomputes
//!   the digest from the candidate PIN.

use std::fmt;

use base64::Engine;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Fixed offset applied to each PIN byte by the shift scheme
pub const SHIFT_OFFSET: u8 = 5;

/// Default Argon2id parameters
pub const DEFAULT_TIME_COST: u32 = 3;
pub const DEFAULT_MEMORY_COST: u32 = 65536; // 64 MiB
pub const DEFAULT_PARALLELISM: u32 = 4;
pub const DEFAULT_HASH_LEN: u32 = 32;

const SALT_LEN: usize = 16;

/// Argon2id parameters for PIN hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argon2Params {
    pub time_cost: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
    pub hash_len: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost: DEFAULT_MEMORY_COST,
            parallelism: DEFAULT_PARALLELISM,
            hash_len: DEFAULT_HASH_LEN,
        }
    }
}

/// How new credentials are derived from a PIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialScheme {
    #[default]
    Shift,
    Argon2(Argon2Params),
}

impl CredentialScheme {
    pub fn name(&self) -> &'static str {
        match self {
            CredentialScheme::Shift => "shift",
            CredentialScheme::Argon2(_) => "argon2",
        }
    }
}

/// Obfuscated representation of a PIN
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Shift-obfuscated PIN bytes
    Shifted(Vec<u8>),
    /// Base64-encoded salt and Argon2id digest
    Hashed {
        salt: String,
        digest: String,
        params: Argon2Params,
    },
}

/// Apply the shift transform to raw PIN bytes
pub fn obfuscate(pin: &str) -> Vec<u8> {
    pin.bytes().map(|b| b.wrapping_add(SHIFT_OFFSET)).collect()
}

/// Undo the shift transform
pub fn deobfuscate(shifted: &[u8]) -> Vec<u8> {
    shifted.iter().map(|b| b.wrapping_sub(SHIFT_OFFSET)).collect()
}

fn argon2_digest(pin: &str, salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    let argon2_params = argon2::Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(params.hash_len as usize),
    )
    .map_err(|e| Error::Credential(format!("Failed to create argon2 params: {:?}", e)))?;

    let argon2 = argon2::Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );

    let mut digest = vec![0u8; params.hash_len as usize];
    argon2
        .hash_password_into(pin.as_bytes(), salt, &mut digest)
        .map_err(|e| Error::Credential(format!("Failed to hash PIN: {:?}", e)))?;

    Ok(digest)
}

impl Credential {
    /// Derive a credential from a plain PIN using the given scheme
    pub fn new(pin: &str, scheme: &CredentialScheme) -> Result<Self> {
        match scheme {
            CredentialScheme::Shift => Ok(Credential::Shifted(obfuscate(pin))),
            CredentialScheme::Argon2(params) => {
                let salt: [u8; SALT_LEN] = rand::thread_rng().gen();
                let digest = argon2_digest(pin, &salt, params)?;
                let engine = base64::engine::general_purpose::STANDARD;
                Ok(Credential::Hashed {
                    salt: engine.encode(salt),
                    digest: engine.encode(digest),
                    params: *params,
                })
            }
        }
    }

    /// Check a candidate PIN for exact equality with the stored one
    pub fn verify(&self, pin: &str) -> bool {
        match self {
            Credential::Shifted(shifted) => deobfuscate(shifted) == pin.as_bytes(),
            Credential::Hashed { salt, digest, params } => {
                let engine = base64::engine::general_purpose::STANDARD;
                let (Ok(salt), Ok(expected)) = (engine.decode(salt), engine.decode(digest)) else {
                    return false;
                };
                match argon2_digest(pin, &salt, params) {
                    Ok(actual) => actual == expected,
                    Err(_) => false,
                }
            }
        }
    }

    /// Recover the plain PIN. Only possible for the shift scheme.
    pub fn reveal(&self) -> Option<String> {
        match self {
            Credential::Shifted(shifted) => String::from_utf8(deobfuscate(shifted)).ok(),
            Credential::Hashed { .. } => None,
        }
    }

    pub fn scheme_name(&self) -> &'static str {
        match self {
            Credential::Shifted(_) => "shift",
            Credential::Hashed { .. } => "argon2",
        }
    }
}

// Never print PIN material, obfuscated or not.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.scheme_name())
    }
}
