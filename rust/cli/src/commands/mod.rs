//! Command handler modules for the deckplay CLI.
//!
//! Each command lives in its own module with a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

pub mod cfg;
pub mod deal;
pub mod deck;
pub mod play;
pub mod shuffle;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use deck::handle_deck_command;
pub use play::handle_play_command;
pub use shuffle::handle_shuffle_command;

use crate::config;
use crate::error::CliError;
use deckplay_engine::deck::ShuffleMethod;

/// Configuration after command-line flags have been applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunSettings {
    pub seed: Option<u64>,
    pub method: ShuffleMethod,
    pub games: u32,
}

/// Loads the layered configuration and lets explicit flags win.
pub(crate) fn resolve_settings(
    seed: Option<u64>,
    method: Option<&str>,
    games: Option<u32>,
) -> Result<RunSettings, CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let method = match method {
        Some(m) => m.parse()?,
        None => cfg.shuffle,
    };
    let games = games.unwrap_or(cfg.games);
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    Ok(RunSettings {
        seed: seed.or(cfg.seed),
        method,
        games,
    })
}
