//! Trace formatters for terminal display.
//!
//! Pure functions turning a [`GameTrace`] into printable lines, one per
//! round:
//!
//! ```text
//! Round 0: 2♣ 7♣ ... | 3♦ ... | ... | ...
//! Round 1: ... | ... | ... | ...  (discarded: 7♣ 3♦ 5♥ K♠)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use deckplay_engine::deck::ShuffleMethod;
//! use deckplay_engine::engine::Dealer;
//! use deckplay_cli::formatters::format_trace;
//!
//! let trace = Dealer::new(Some(1), ShuffleMethod::RandomKey).play_randomly();
//! let lines = format_trace(&trace);
//! assert_eq!(lines.len(), 14);
//! assert!(lines[13].starts_with("Round 13: - | - | - | -"));
//! ```

use crate::ui::card_line;
use deckplay_engine::simulator::{GameTrace, Round};
use deckplay_engine::to_name;

/// Format one round: hands separated by ` | `, followed by the discards
/// when the round has any.
pub fn format_round(index: usize, round: &Round) -> String {
    let hands: Vec<String> = to_name(&round.hands)
        .iter()
        .map(|names| card_line(names))
        .collect();
    let mut line = format!("Round {}: {}", index, hands.join(" | "));
    if let Some(discarded) = &round.discarded {
        line.push_str(&format!("  (discarded: {})", card_line(&to_name(discarded))));
    }
    line
}

pub fn format_trace(trace: &GameTrace) -> Vec<String> {
    trace
        .rounds()
        .iter()
        .enumerate()
        .map(|(i, round)| format_round(i, round))
        .collect()
}
