//! HMAC commitment tags for the commit-reveal scheme.

use super::Secret;
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Length of a commitment tag in bytes
pub const TAG_LEN: usize = 32;

/// Commitment = HMAC-SHA256(key = secret, message = move name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CommitmentTag([u8; TAG_LEN]);

impl CommitmentTag {
    /// Compute the tag binding `secret` to `message`
    pub fn new(secret: &Secret, message: &[u8]) -> Result<Self, GameError> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| GameError::InvalidKey(e.to_string()))?
            .chain_update(message);
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Parse a hex-encoded tag as published at the start of a round
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidTag(e.to_string()))?;
        let bytes: [u8; TAG_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            GameError::InvalidTag(format!("expected {} bytes, got {}", TAG_LEN, v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Verify that the given secret and message produce this tag.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, secret: &Secret, message: &[u8]) -> bool {
        HmacSha256::new_from_slice(secret.as_bytes())
            .map(|mac| mac.chain_update(message).verify_slice(&self.0).is_ok())
            .unwrap_or(false)
    }
}

impl FromStr for CommitmentTag {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for CommitmentTag {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<CommitmentTag> for String {
    fn from(tag: CommitmentTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
