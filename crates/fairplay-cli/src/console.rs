//! Interactive console session for a single round.

use fairplay_core::{
    CommitmentTag, GameError, HelpTable, MoveSet, Round, RoundReport, Secret,
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{info, warn};

const INVALID_INPUT: &str =
    "Invalid input. Please enter a number corresponding to the available moves or '?' for help.";

/// Errors from the console layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a session ended
#[derive(Debug)]
pub enum SessionEnd {
    /// A move was played and the key revealed
    Played(RoundReport),
    /// The player chose to exit, or input ran out
    Exited,
    /// The move set was rejected before any round started
    InvalidMoves,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Exit,
    Help,
    /// 0-based index into the move set
    Move(usize),
    Invalid,
}

impl Choice {
    fn parse(line: &str, move_count: usize) -> Self {
        match line.trim() {
            "0" => Choice::Exit,
            "?" => Choice::Help,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=move_count).contains(&n) => Choice::Move(n - 1),
                _ => Choice::Invalid,
            },
        }
    }
}

/// Validate the move list, commit to a computer move, and run the prompt loop
pub fn run_game<G, R, W>(
    moves: Vec<String>,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd, CliError>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    let moves = match MoveSet::new(moves) {
        Ok(moves) => moves,
        Err(GameError::InvalidMoveSet(violation)) => {
            warn!(%violation, "rejected move set");
            writeln!(output, "Error: {}", violation)?;
            writeln!(output, "Example: fairplay rock paper scissors")?;
            return Ok(SessionEnd::InvalidMoves);
        }
        Err(e) => return Err(e.into()),
    };

    let round = Round::start(&moves, rng)?;
    play_round(round, input, output)
}

/// Publish the commitment, then prompt until the player exits or picks a move
pub fn play_round<R: BufRead, W: Write>(
    round: Round<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd, CliError> {
    let moves = round.moves();

    writeln!(output, "HMAC: {}", round.tag())?;
    writeln!(output, "Available moves:")?;
    for (i, name) in moves.iter().enumerate() {
        writeln!(output, "{} - {}", i + 1, name)?;
    }
    writeln!(output, "0 - exit")?;
    writeln!(output, "? - help")?;

    let mut line = String::new();
    let index = loop {
        write!(output, "Enter your move: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "Game exited.")?;
            return Ok(SessionEnd::Exited);
        }

        match Choice::parse(&line, moves.len()) {
            Choice::Exit => {
                writeln!(output, "Game exited.")?;
                return Ok(SessionEnd::Exited);
            }
            Choice::Help => write!(output, "{}", HelpTable::new(moves))?,
            Choice::Move(index) => break index,
            Choice::Invalid => {
                warn!(input = line.trim(), "rejected player input");
                writeln!(output, "{}", INVALID_INPUT)?;
            }
        }
    };

    let player_move = moves
        .get(index)
        .ok_or_else(|| GameError::UnknownMove(format!("#{}", index + 1)))?;
    let report = round.play(player_move)?;

    writeln!(output, "Your move: {}", report.player_move)?;
    writeln!(output, "Computer move: {}", report.computer_move)?;
    writeln!(output, "{}", report.outcome.verdict())?;
    writeln!(output, "HMAC key: {}", report.key)?;
    info!(round_id = %report.round_id, outcome = %report.outcome, "round finished");

    Ok(SessionEnd::Played(report))
}

/// Recompute a published tag from a revealed key and move
pub fn verify_reveal<W: Write>(
    key: &str,
    move_name: &str,
    hmac: &str,
    output: &mut W,
) -> Result<bool, CliError> {
    let key = Secret::from_hex(key)?;
    let published = CommitmentTag::from_hex(hmac)?;
    let recomputed = CommitmentTag::new(&key, move_name.as_bytes())?;

    if published.verify(&key, move_name.as_bytes()) {
        writeln!(output, "HMAC matches: the computer committed to {}", move_name)?;
        Ok(true)
    } else {
        writeln!(output, "HMAC mismatch: expected {}", published)?;
        writeln!(output, "                    got {}", recomputed)?;
        Ok(false)
    }
}
