//! Play command handler: deal, then discard one random card per hand per
//! round until every hand is empty.
//!
//! With `--output`, every game is appended to a JSONL file as a
//! [`TraceRecord`].

use super::resolve_settings;
use crate::error::CliError;
use crate::formatters::format_trace;
use crate::ui;
use deckplay_engine::engine::Dealer;
use deckplay_engine::logger::{TraceLogger, TraceRecord};
use std::io::Write;

/// Handle the play command.
///
/// # Arguments
///
/// * `seed` - Base RNG seed; game `i` uses `seed + i`
/// * `method` - Optional shuffle method name
/// * `games` - Number of games to run (defaults to configuration)
/// * `output` - Optional JSONL file receiving one record per game
/// * `out` - Output stream for the printed traces
/// * `err` - Output stream for warnings
pub fn handle_play_command(
    seed: Option<u64>,
    method: Option<&str>,
    games: Option<u32>,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(seed, method, games)?;
    let mut logger = match output {
        Some(path) => {
            if std::path::Path::new(path).exists() {
                ui::display_warning(err, &format!("appending to existing file {}", path))?;
            }
            Some(TraceLogger::create(path)?)
        }
        None => None,
    };

    for game in 0..settings.games {
        let game_seed = settings.seed.map(|s| s.wrapping_add(u64::from(game)));
        let mut dealer = Dealer::new(game_seed, settings.method);
        let trace = dealer.play_randomly();
        tracing::info!(game, seed = dealer.seed(), "game played");

        writeln!(
            out,
            "Game {}/{} seed={} shuffle={}",
            game + 1,
            settings.games,
            dealer.seed(),
            dealer.method()
        )?;
        for line in format_trace(&trace) {
            writeln!(out, "{}", line)?;
        }

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            let record = TraceRecord::from_trace(id, Some(dealer.seed()), dealer.method(), &trace);
            logger.write(&record)?;
        }
    }

    if let Some(path) = output {
        writeln!(out, "Wrote {} game(s) to {}", settings.games, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_header_and_fourteen_rounds() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(Some(4), None, Some(1), None, &mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 15);
        assert!(lines[0].starts_with("Game 1/1 seed=4 shuffle="));
        assert!(lines[1].starts_with("Round 0: "));
        assert!(lines[14].starts_with("Round 13: - | - | - | -"));
    }

    #[test]
    fn consecutive_games_use_consecutive_seeds() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(Some(100), None, Some(3), None, &mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("Game")).collect();
        assert_eq!(headers.len(), 3);
        assert!(headers[2].starts_with("Game 3/3 seed=102 "));
    }

    #[test]
    fn zero_games_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_play_command(Some(1), None, Some(0), None, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }
}
