//! Fairplay Core Library
//!
//! This crate provides the commit-reveal primitives, the circular outcome
//! rules, and the round lifecycle for a rock-paper-scissors style game over any
//! odd number of moves.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{CommitmentTag, KeyGenerator, Secret};
pub use error::{GameError, MoveSetViolation};
pub use games::{GameRules, HelpTable, MoveSet};
pub use protocol::{Round, RoundId, RoundOutcome, RoundReport};
