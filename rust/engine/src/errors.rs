use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Rank ordinal out of range: {0} (expected 0..13)")]
    RankOutOfRange(u8),
    #[error("Suit ordinal out of range: {0} (expected 0..4)")]
    SuitOutOfRange(u8),
    #[error("Card index out of range: {0} (expected 0..52)")]
    IndexOutOfRange(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Cannot deal {actual} cards, expected {expected}")]
    WrongDeckSize { expected: usize, actual: usize },
    #[error("Card {0} appears more than once in the deck")]
    DuplicateCard(String),
    #[error("Hand {hand} holds {actual} cards, expected {expected}")]
    WrongHandSize {
        hand: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown shuffle method: {0} (expected random-key or fisher-yates)")]
pub struct ParseShuffleMethodError(pub String);
