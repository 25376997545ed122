//! Prints a single shuffled deck.

use super::resolve_settings;
use crate::error::CliError;
use crate::ui;
use deckplay_engine::engine::Dealer;
use deckplay_engine::to_name;
use std::io::Write;

pub fn handle_shuffle_command(
    seed: Option<u64>,
    method: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let settings = resolve_settings(seed, method, None)?;
    let mut dealer = Dealer::new(settings.seed, settings.method);
    let deck = dealer.shuffled_deck();
    writeln!(out, "Seed: {} ({})", dealer.seed(), dealer.method())?;
    writeln!(out, "Deck: {}", ui::card_line(&to_name(&deck)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_shuffle_command(Some(8), Some("fisher-yates"), &mut a).unwrap();
        handle_shuffle_command(Some(8), Some("fisher-yates"), &mut b).unwrap();
        assert_eq!(a, b);
        let output = String::from_utf8(a).unwrap();
        assert!(output.starts_with("Seed: 8 (fisher-yates)\n"));
        let deck_line = output.lines().nth(1).unwrap();
        assert_eq!(deck_line.trim_start_matches("Deck: ").split(' ').count(), 52);
    }

    #[test]
    fn unknown_method_is_invalid_input() {
        let mut out = Vec::new();
        let res = handle_shuffle_command(Some(1), Some("overhand"), &mut out);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
