//! Error types for the core library.

use thiserror::Error;

/// Reason a list of moves was rejected as a move set
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetViolation {
    #[error("The number of moves must be an odd number ≥ 3 (got {0}).")]
    TooFew(usize),

    #[error("The number of moves must be an odd number ≥ 3 (got {0}).")]
    EvenCount(usize),

    #[error("Moves must be unique and non-repeating ({0:?} appears more than once).")]
    Duplicate(String),
}

/// Errors from core game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetViolation),

    #[error("Unknown move: {0:?}")]
    UnknownMove(String),

    #[error("Secure random source unavailable: {0}")]
    EntropySource(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid HMAC tag: {0}")]
    InvalidTag(String),
}

impl From<rand::Error> for GameError {
    fn from(err: rand::Error) -> Self {
        GameError::EntropySource(err.to_string())
    }
}
