//! Deal command handler.
//!
//! Deals four sorted 13-card hands from a fresh shuffle and prints them,
//! one hand per line.

use super::resolve_settings;
use crate::error::CliError;
use crate::ui;
use deckplay_engine::engine::Dealer;
use deckplay_engine::to_name;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `method` - Optional shuffle method name, overrides configuration
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    method: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(seed, method, None)?;
    let mut dealer = Dealer::new(settings.seed, settings.method);
    let hands = dealer.random_hands();
    writeln!(out, "Seed: {} ({})", dealer.seed(), dealer.method())?;
    for (i, names) in to_name(&hands).iter().enumerate() {
        writeln!(out, "Hand {}: {}", i + 1, ui::card_line(names))?;
    }
    Ok(())
}
