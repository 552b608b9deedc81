//! Cryptographic primitives for the fair-play protocol.
//!
//! This module provides:
//! - Secret and KeyGenerator for single-use round keys
//! - CommitmentTag for the HMAC commit-reveal scheme

mod commitment;
mod key;

pub use commitment::{CommitmentTag, TAG_LEN};
pub use key::{KeyGenerator, Secret, SECRET_LEN};
