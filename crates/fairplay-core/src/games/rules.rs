//! Circular win/lose/draw resolution for any odd number of moves.

use super::MoveSet;
use crate::error::GameError;
use crate::protocol::RoundOutcome;

/// Outcome rules over a move set.
///
/// A move is beaten by the `N / 2` moves that follow it in circular order and
/// beats the `N / 2` moves that precede it. For `[rock, paper, scissors]` this
/// gives the classic table: paper beats rock, scissors beat paper, rock beats
/// scissors.
#[derive(Clone, Copy, Debug)]
pub struct GameRules<'a> {
    moves: &'a MoveSet,
}

impl<'a> GameRules<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        Self { moves }
    }

    /// The move set these rules apply to
    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    /// Outcome for the player, given both moves by name
    pub fn resolve(
        &self,
        player_move: &str,
        computer_move: &str,
    ) -> Result<RoundOutcome, GameError> {
        let p = self.moves.index_of(player_move)?;
        let c = self.moves.index_of(computer_move)?;
        Ok(self.resolve_indices(p, c))
    }

    /// Outcome for the player, given both moves by 0-based position.
    ///
    /// Both indices must be below `N`.
    pub(crate) fn resolve_indices(&self, p: usize, c: usize) -> RoundOutcome {
        if p == c {
            return RoundOutcome::Draw;
        }
        let n = self.moves.len();
        let half = n / 2;
        // p is in {c+1, ..., c+half} (mod n) exactly when this offset is in 1..=half
        let offset = (p + n - c) % n;
        if offset <= half {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    /// Does `a` beat `b`?
    pub fn beats(&self, a: &str, b: &str) -> Result<bool, GameError> {
        Ok(self.resolve(a, b)? == RoundOutcome::Win)
    }

    /// The moves that beat `target`, in circular order starting right after it
    pub fn winning_set(&self, target: &str) -> Result<Vec<&'a str>, GameError> {
        let c = self.moves.index_of(target)?;
        let n = self.moves.len();
        Ok((1..=n / 2)
            .filter_map(|i| self.moves.get((c + i) % n))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors"]).unwrap()
    }

    fn extended() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap()
    }

    #[test]
    fn test_rock_beats_scissors() {
        let moves = classic();
        let rules = GameRules::new(&moves);

        assert_eq!(rules.resolve("rock", "scissors").unwrap(), RoundOutcome::Win);
        assert_eq!(rules.resolve("scissors", "rock").unwrap(), RoundOutcome::Lose);
    }

    #[test]
    fn test_paper_beats_rock() {
        let moves = classic();
        let rules = GameRules::new(&moves);

        assert_eq!(rules.resolve("rock", "paper").unwrap(), RoundOutcome::Lose);
        assert_eq!(rules.resolve("paper", "rock").unwrap(), RoundOutcome::Win);
    }

    #[test]
    fn test_scissors_beat_paper() {
        let moves = classic();
        let rules = GameRules::new(&moves);

        assert_eq!(rules.resolve("scissors", "paper").unwrap(), RoundOutcome::Win);
        assert_eq!(rules.resolve("paper", "scissors").unwrap(), RoundOutcome::Lose);
    }

    #[test]
    fn test_draws() {
        let moves = classic();
        let rules = GameRules::new(&moves);

        for m in moves.iter() {
            assert_eq!(rules.resolve(m, m).unwrap(), RoundOutcome::Draw);
        }
    }

    #[test]
    fn test_five_moves_rock_beats_spock() {
        let moves = extended();
        let rules = GameRules::new(&moves);

        assert_eq!(rules.winning_set("spock").unwrap(), vec!["rock", "paper"]);
        assert_eq!(rules.resolve("rock", "spock").unwrap(), RoundOutcome::Win);
        assert_eq!(rules.resolve("spock", "rock").unwrap(), RoundOutcome::Lose);
    }

    #[test]
    fn test_five_moves_full_row() {
        let moves = extended();
        let rules = GameRules::new(&moves);

        // paper is beaten by scissors and lizard, beats spock and rock
        assert_eq!(rules.winning_set("paper").unwrap(), vec!["scissors", "lizard"]);
        assert!(rules.beats("paper", "rock").unwrap());
        assert!(rules.beats("paper", "spock").unwrap());
        assert!(!rules.beats("paper", "scissors").unwrap());
        assert!(!rules.beats("paper", "lizard").unwrap());
        assert!(!rules.beats("paper", "paper").unwrap());
    }

    #[test]
    fn test_all_outcomes_even_split() {
        let moves = classic();
        let rules = GameRules::new(&moves);
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for a in moves.iter() {
            for b in moves.iter() {
                match rules.resolve(a, b).unwrap() {
                    RoundOutcome::Win => wins += 1,
                    RoundOutcome::Lose => losses += 1,
                    RoundOutcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_unknown_move_rejected() {
        let moves = classic();
        let rules = GameRules::new(&moves);

        assert!(matches!(
            rules.resolve("rock", "spock"),
            Err(GameError::UnknownMove(name)) if name == "spock"
        ));
        assert!(matches!(
            rules.resolve("lizard", "rock"),
            Err(GameError::UnknownMove(name)) if name == "lizard"
        ));
        assert!(rules.winning_set("well").is_err());
    }
}
