//! Round lifecycle and protocol types.

mod round;
mod types;

pub use round::{Round, RoundReport};
pub use types::{RoundId, RoundOutcome};
