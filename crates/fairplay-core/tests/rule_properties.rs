//! Property tests for the circular outcome rules and the commitment.

use fairplay_core::{
    crypto::{CommitmentTag, Secret},
    games::{GameRules, MoveSet},
    protocol::RoundOutcome,
};
use proptest::prelude::*;

/// Odd move sets of size 3..=31 with distinct names
fn move_set() -> impl Strategy<Value = MoveSet> {
    (1usize..=15).prop_map(|k| {
        let n = 2 * k + 1;
        MoveSet::new((0..n).map(|i| format!("move-{}", i))).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_same_move_draws(moves in move_set()) {
        let rules = GameRules::new(&moves);
        for m in moves.iter() {
            prop_assert_eq!(rules.resolve(m, m).unwrap(), RoundOutcome::Draw);
        }
    }

    #[test]
    fn prop_outcomes_are_antisymmetric(moves in move_set()) {
        let rules = GameRules::new(&moves);
        for (i, a) in moves.iter().enumerate() {
            for (j, b) in moves.iter().enumerate() {
                if i == j {
                    continue;
                }
                let forward = rules.resolve(a, b).unwrap();
                prop_assert_ne!(forward, RoundOutcome::Draw);
                prop_assert_eq!(rules.resolve(b, a).unwrap(), forward.reversed());
            }
        }
    }

    #[test]
    fn prop_each_move_splits_evenly(moves in move_set()) {
        let rules = GameRules::new(&moves);
        let half = (moves.len() - 1) / 2;
        for a in moves.iter() {
            let count = |outcome: RoundOutcome| {
                moves
                    .iter()
                    .filter(|b| rules.resolve(a, b).unwrap() == outcome)
                    .count()
            };
            let wins = count(RoundOutcome::Win);
            let losses = count(RoundOutcome::Lose);
            prop_assert_eq!(wins, half);
            prop_assert_eq!(losses, half);
            prop_assert_eq!(rules.winning_set(a).unwrap().len(), half);
        }
    }

    #[test]
    fn prop_winning_set_is_next_half(moves in move_set(), seed in any::<usize>()) {
        let rules = GameRules::new(&moves);
        let n = moves.len();
        let c = seed % n;
        let target = moves.get(c).unwrap();
        let expected: Vec<&str> = (1..=n / 2).map(|i| moves.get((c + i) % n).unwrap()).collect();
        prop_assert_eq!(rules.winning_set(target).unwrap(), expected.clone());
        for winner in expected {
            prop_assert_eq!(rules.resolve(winner, target).unwrap(), RoundOutcome::Win);
        }
    }

    #[test]
    fn prop_commitment_is_deterministic(key in any::<[u8; 32]>(), message in ".{1,32}") {
        let secret = Secret::from_bytes(key);
        let tag = CommitmentTag::new(&secret, message.as_bytes()).unwrap();
        prop_assert_eq!(tag, CommitmentTag::new(&secret, message.as_bytes()).unwrap());
        prop_assert!(tag.verify(&secret, message.as_bytes()));

        let mut altered = message.clone().into_bytes();
        altered[0] ^= 0x01;
        prop_assert_ne!(tag, CommitmentTag::new(&secret, &altered).unwrap());
    }
}
