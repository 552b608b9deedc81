//! A single commit / play / reveal round against the computer.

use super::{RoundId, RoundOutcome};
use crate::crypto::{CommitmentTag, KeyGenerator, Secret};
use crate::error::GameError;
use crate::games::{GameRules, MoveSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A round whose computer move is fixed and committed but not yet revealed.
///
/// Only the id and the commitment tag are observable until [`Round::play`]
/// consumes the round and reveals the secret.
pub struct Round<'a> {
    id: RoundId,
    moves: &'a MoveSet,
    computer_index: usize,
    secret: Secret,
    tag: CommitmentTag,
}

impl<'a> Round<'a> {
    /// Start a round with a fresh secret and a uniformly chosen computer move.
    ///
    /// `rng` only picks the move; the secret always comes from the OS CSPRNG.
    pub fn start<R: Rng + ?Sized>(moves: &'a MoveSet, rng: &mut R) -> Result<Self, GameError> {
        let secret = KeyGenerator::generate()?;
        let computer_index = rng.gen_range(0..moves.len());
        Self::commit(moves, secret, computer_index)
    }

    /// Build a round from a known secret and computer move
    pub fn from_parts(
        moves: &'a MoveSet,
        secret: Secret,
        computer_move: &str,
    ) -> Result<Self, GameError> {
        let computer_index = moves.index_of(computer_move)?;
        Self::commit(moves, secret, computer_index)
    }

    fn commit(
        moves: &'a MoveSet,
        secret: Secret,
        computer_index: usize,
    ) -> Result<Self, GameError> {
        let computer_move = moves
            .get(computer_index)
            .ok_or_else(|| GameError::UnknownMove(format!("#{}", computer_index)))?;
        let tag = CommitmentTag::new(&secret, computer_move.as_bytes())?;
        let id = RoundId::new();
        debug!(round_id = %id, hmac = %tag, moves = moves.len(), "round committed");

        Ok(Self {
            id,
            moves,
            computer_index,
            secret,
            tag,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Tag to publish before the player chooses
    pub fn tag(&self) -> &CommitmentTag {
        &self.tag
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// Resolve the player's move against the committed one and reveal the secret
    pub fn play(self, player_move: &str) -> Result<RoundReport, GameError> {
        let player_index = self.moves.index_of(player_move)?;
        let outcome = GameRules::new(self.moves).resolve_indices(player_index, self.computer_index);
        let computer_move = self
            .moves
            .get(self.computer_index)
            .ok_or_else(|| GameError::UnknownMove(format!("#{}", self.computer_index)))?;
        debug!(round_id = %self.id, %outcome, "round revealed");

        Ok(RoundReport {
            round_id: self.id,
            player_move: player_move.to_string(),
            computer_move: computer_move.to_string(),
            outcome,
            hmac: self.tag,
            key: self.secret,
        })
    }
}

impl fmt::Debug for Round<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Transcript of a finished round, including the revealed key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_id: RoundId,
    pub player_move: String,
    pub computer_move: String,
    pub outcome: RoundOutcome,
    /// Tag published before the player chose
    pub hmac: CommitmentTag,
    /// Revealed secret
    pub key: Secret,
}

impl RoundReport {
    /// Recompute the tag from the revealed key and the computer's move
    pub fn verify(&self) -> bool {
        self.hmac.verify(&self.key, self.computer_move.as_bytes())
    }

    /// Check the revealed key and move against a tag recorded independently
    pub fn verify_against(&self, published: &CommitmentTag) -> bool {
        published.verify(&self.key, self.computer_move.as_bytes())
    }
}
