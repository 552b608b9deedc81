//! Secret keys for the commit-reveal scheme.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a secret key in bytes (256 bits)
pub const SECRET_LEN: usize = 32;

/// Single-use HMAC key, revealed to the player once the round is over
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    /// Parse a hex-encoded key as printed at the end of a round
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidKey(e.to_string()))?;
        let bytes: [u8; SECRET_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            GameError::InvalidKey(format!("expected {} bytes, got {}", SECRET_LEN, v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Secret {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Secret {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.to_hex()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Source of fresh secrets.
///
/// Secrets always come from a cryptographically secure generator. The computer's
/// move is picked separately and may use any uniform generator.
pub struct KeyGenerator;

impl KeyGenerator {
    /// Generate a new secret from the operating system's CSPRNG
    pub fn generate() -> Result<Secret, GameError> {
        Self::generate_from(&mut OsRng)
    }

    /// Generate a new secret from the given cryptographically secure generator
    pub fn generate_from<R>(rng: &mut R) -> Result<Secret, GameError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; SECRET_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Secret(bytes))
    }
}
