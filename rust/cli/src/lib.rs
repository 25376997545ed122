//! # deckplay CLI Library
//!
//! Command-line front end for the deckplay engine. The primary entry point
//! is [`run`], which parses arguments, installs logging and dispatches to a
//! subcommand handler.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = deckplay_cli::run(["deckplay", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Hand 4:"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deck`: Print the canonical deck by suit
//! - `shuffle`: Print one shuffled deck
//! - `deal`: Deal four sorted hands
//! - `play`: Run random-discard games, optionally recording them as JSONL
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, DeckplayCli};

use commands::{
    handle_cfg_command, handle_deal_command, handle_deck_command, handle_play_command,
    handle_shuffle_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deck", "shuffle", "deal", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DeckplayCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: deckplay <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Deck => handle_deck_command(out),
        Commands::Shuffle { seed, method } => handle_shuffle_command(seed, method.as_deref(), out),
        Commands::Deal { seed, method } => handle_deal_command(seed, method.as_deref(), out),
        Commands::Play {
            seed,
            method,
            games,
            output,
        } => handle_play_command(seed, method.as_deref(), games, output.as_deref(), out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
