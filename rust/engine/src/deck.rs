use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT, SUIT_COUNT};
use crate::errors::ParseShuffleMethodError;

static CANONICAL_DECK: OnceLock<[Card; DECK_SIZE]> = OnceLock::new();

/// The 52 cards in suit-major, rank-minor order (all clubs low to high,
/// then diamonds, hearts, spades). Built on first access and never mutated.
pub fn canonical_deck() -> &'static [Card; DECK_SIZE] {
    CANONICAL_DECK.get_or_init(|| {
        let mut deck = [Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        }; DECK_SIZE];
        for (s, &suit) in Suit::ALL.iter().enumerate() {
            for (r, &rank) in Rank::ALL.iter().enumerate() {
                deck[s * RANKS_PER_SUIT + r] = Card { suit, rank };
            }
        }
        deck
    })
}

/// The canonical deck split into its four suits. Reference only.
pub fn suit_partition() -> [&'static [Card]; SUIT_COUNT] {
    let deck = canonical_deck();
    std::array::from_fn(|s| &deck[s * RANKS_PER_SUIT..(s + 1) * RANKS_PER_SUIT])
}

/// How a [`Shuffler`] permutes the deck.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleMethod {
    /// Tag every card with a uniform key in `[0, 1)` and sort by key.
    #[default]
    RandomKey,
    /// In-place Fisher-Yates.
    FisherYates,
}

impl ShuffleMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ShuffleMethod::RandomKey => "random-key",
            ShuffleMethod::FisherYates => "fisher-yates",
        }
    }
}

impl fmt::Display for ShuffleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuffleMethod {
    type Err = ParseShuffleMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random-key" | "random_key" | "randomkey" => Ok(ShuffleMethod::RandomKey),
            "fisher-yates" | "fisher_yates" | "fisheryates" => Ok(ShuffleMethod::FisherYates),
            _ => Err(ParseShuffleMethodError(s.to_string())),
        }
    }
}

/// Produces fresh permutations of the canonical deck from a seeded ChaCha20 stream.
#[derive(Debug)]
pub struct Shuffler {
    rng: ChaCha20Rng,
    method: ShuffleMethod,
}

impl Shuffler {
    pub fn new_with_seed(seed: u64, method: ShuffleMethod) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            method,
        }
    }

    pub fn method(&self) -> ShuffleMethod {
        self.method
    }

    /// Returns a new shuffled copy; the canonical deck is left untouched.
    pub fn shuffled(&mut self) -> Vec<Card> {
        let deck = canonical_deck();
        let cards = match self.method {
            ShuffleMethod::RandomKey => {
                let mut keyed: Vec<(f64, Card)> = deck
                    .iter()
                    .map(|&card| (self.rng.random::<f64>(), card))
                    .collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
                keyed.into_iter().map(|(_, card)| card).collect()
            }
            ShuffleMethod::FisherYates => {
                let mut cards = deck.to_vec();
                cards.shuffle(&mut self.rng);
                cards
            }
        };
        tracing::debug!(method = %self.method, "shuffled deck");
        cards
    }

    /// The underlying stream, shared with the discard simulation so that a
    /// single seed reproduces a whole run.
    pub fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }
}
