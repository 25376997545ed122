//! # deckplay-engine: deck, deal and random-discard simulation
//!
//! Builds the standard 52-card deck, shuffles it, deals four sorted 13-card
//! hands and runs a random-discard simulation in which every hand loses one
//! uniformly random card per round until empty. The whole run is recorded as
//! a [`GameTrace`] of 14 snapshots.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and total order
//! - [`deck`] - Canonical deck singleton, suit partition and the seeded shuffler
//! - [`hand`] - Sorted hands and the four-way deal
//! - [`simulator`] - Discard rounds and the game trace
//! - [`engine`] - Seeded [`Dealer`](engine::Dealer) tying the above together
//! - [`names`] - Display names for cards and nested card sequences
//! - [`logger`] - JSONL trace records
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use deckplay_engine::{play_randomly, to_name};
//!
//! let trace = play_randomly();
//! assert_eq!(trace.len(), 14);
//! let names = to_name(&trace);
//! assert_eq!(names[0][0].len(), 13);
//! assert!(names[13].iter().all(|hand| hand.is_empty()));
//! ```
//!
//! ## Deterministic Runs
//!
//! ```rust
//! use deckplay_engine::deck::ShuffleMethod;
//! use deckplay_engine::engine::Dealer;
//!
//! let a = Dealer::new(Some(42), ShuffleMethod::FisherYates).play_randomly();
//! let b = Dealer::new(Some(42), ShuffleMethod::FisherYates).play_randomly();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod names;
pub mod simulator;

pub use cards::Card;
pub use hand::Hand;
pub use names::{to_name, ToName};
pub use simulator::GameTrace;

use deck::ShuffleMethod;
use engine::Dealer;

/// A fresh random permutation of the 52 cards.
pub fn generate_shuffled_deck() -> Vec<Card> {
    Dealer::new(None, ShuffleMethod::default()).shuffled_deck()
}

/// Four sorted 13-card hands dealt from a fresh shuffle.
pub fn generate_random_hands() -> [Hand; hand::HAND_COUNT] {
    Dealer::new(None, ShuffleMethod::default()).random_hands()
}

/// Deals and runs the random-discard simulation to completion.
pub fn play_randomly() -> GameTrace {
    Dealer::new(None, ShuffleMethod::default()).play_randomly()
}
