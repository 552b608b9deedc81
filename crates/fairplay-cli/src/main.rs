//! Fairplay console game
//!
//! Rock-paper-scissors over any odd number of moves. The computer commits to
//! its move with an HMAC before the player chooses and reveals the key after,
//! so the player can check it did not cheat.
//!
//! Usage:
//! - `fairplay rock paper scissors` - play one round
//! - `fairplay verify --key <HEX> --move <NAME> --hmac <HEX>` - check a reveal

mod console;

use clap::{Parser, Subcommand};
use console::{CliError, SessionEnd};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "fairplay", version)]
#[command(about = "Provably fair rock-paper-scissors for any odd number of moves")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in circular order; each beats the half of the list before it
    #[arg(value_name = "MOVES")]
    moves: Vec<String>,

    /// Print the round transcript as a JSON line when the round ends
    #[arg(long)]
    json: bool,

    /// Log filter directive (logs go to stderr)
    #[arg(long, env = "FAIRPLAY_LOG", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a revealed key and move against a published HMAC
    Verify {
        /// Key printed at the end of the round (hex)
        #[arg(long)]
        key: String,

        /// Move the computer claims to have played
        #[arg(long = "move", value_name = "NAME")]
        move_name: String,

        /// HMAC published at the start of the round (hex)
        #[arg(long)]
        hmac: String,
    },
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "fairplay failed");
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Some(Command::Verify {
        key,
        move_name,
        hmac,
    }) = cli.command
    {
        let matched = console::verify_reveal(&key, &move_name, &hmac, &mut output)?;
        return Ok(if matched {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let stdin = io::stdin();
    let end = console::run_game(
        cli.moves,
        &mut rand::thread_rng(),
        &mut stdin.lock(),
        &mut output,
    )?;

    match end {
        SessionEnd::Played(report) => {
            if cli.json {
                writeln!(output, "{}", serde_json::to_string(&report)?)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        SessionEnd::Exited => Ok(ExitCode::SUCCESS),
        SessionEnd::InvalidMoves => Ok(ExitCode::FAILURE),
    }
}
