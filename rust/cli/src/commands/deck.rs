//! Prints the canonical deck split by suit.

use crate::error::CliError;
use crate::ui;
use deckplay_engine::deck::suit_partition;
use deckplay_engine::to_name;
use std::io::Write;

pub fn handle_deck_command(out: &mut dyn Write) -> Result<(), CliError> {
    for suit in suit_partition() {
        let symbol = suit.first().map(|c| c.suit_label()).unwrap_or("?");
        writeln!(out, "{}: {}", symbol, ui::card_line(&to_name(suit)))?;
    }
    Ok(())
}
