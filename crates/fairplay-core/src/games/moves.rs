//! Ordered, validated move sets.

use crate::error::{GameError, MoveSetViolation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered list of unique move names.
///
/// The length is always odd and at least [`MoveSet::MIN_MOVES`]. Order matters:
/// it defines the circular adjacency used to decide who wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Smallest playable move set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        Self::validate(&moves)?;
        Ok(Self(moves))
    }

    /// Check the move list without building a set
    pub fn validate(moves: &[String]) -> Result<(), MoveSetViolation> {
        if moves.len() < Self::MIN_MOVES {
            return Err(MoveSetViolation::TooFew(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(MoveSetViolation::EvenCount(moves.len()));
        }
        let mut seen = HashSet::with_capacity(moves.len());
        for name in moves {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetViolation::Duplicate(name.clone()));
            }
        }
        Ok(())
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves in their configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Move at a 0-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// 0-based position of a move
    pub fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.0
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    /// Does the set contain this move?
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|m| m == name)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::validate(&moves)?;
        Ok(Self(moves))
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}
