//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique round identifier, used to correlate log lines
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round result from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// Short label used in the help table
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "Win",
            RoundOutcome::Lose => "Lose",
            RoundOutcome::Draw => "Draw",
        }
    }

    /// Message announced to the player at the end of a round
    pub fn verdict(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "You win!",
            RoundOutcome::Lose => "You lose!",
            RoundOutcome::Draw => "Draw",
        }
    }

    /// The same result seen from the other side
    pub fn reversed(&self) -> RoundOutcome {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
