use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CardError;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;
/// Number of suits in a standard deck.
pub const SUIT_COUNT: usize = 4;
/// Total number of cards in a standard deck.
pub const DECK_SIZE: usize = RANKS_PER_SUIT * SUIT_COUNT;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the suit ordinal used by [`Card::order_index`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn from_ordinal(ordinal: u8) -> Result<Suit, CardError> {
        Suit::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(CardError::SuitOutOfRange(ordinal))
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants are the rank ordinal, 0 for Two up to 12 for Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Rendered as `X` so that every label is a single character
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn from_ordinal(ordinal: u8) -> Result<Rank, CardError> {
        Rank::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(CardError::RankOutOfRange(ordinal))
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "X",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single immutable playing card.
///
/// Field order matters: the derived `Ord` compares suit first and rank
/// second, which is exactly ascending [`Card::order_index`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    /// Builds a card from a rank ordinal (0..13) and a suit ordinal (0..4).
    pub fn try_new(rank: u8, suit: u8) -> Result<Card, CardError> {
        Ok(Card {
            suit: Suit::from_ordinal(suit)?,
            rank: Rank::from_ordinal(rank)?,
        })
    }

    /// Inverse of [`Card::order_index`].
    pub fn from_index(index: u8) -> Result<Card, CardError> {
        if index as usize >= DECK_SIZE {
            return Err(CardError::IndexOutOfRange(index));
        }
        let per_suit = RANKS_PER_SUIT as u8;
        Card::try_new(index % per_suit, index / per_suit)
    }

    /// `13 * suit + rank`, unique in `0..52`.
    pub fn order_index(&self) -> u8 {
        RANKS_PER_SUIT as u8 * self.suit.ordinal() + self.rank.ordinal()
    }

    pub fn rank_label(&self) -> &'static str {
        self.rank.label()
    }

    pub fn suit_label(&self) -> &'static str {
        self.suit.symbol()
    }

    /// Display name: rank label followed by the suit symbol, e.g. `X♥`.
    pub fn name(&self) -> String {
        format!("{}{}", self.rank_label(), self.suit_label())
    }

    /// Canonical ascending order of cards.
    pub fn compare(a: &Card, b: &Card) -> Ordering {
        a.order_index().cmp(&b.order_index())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_is_suit_major() {
        let c = Card::try_new(0, 1).unwrap();
        assert_eq!(c.order_index(), 13);
        let ace_spades = Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        };
        assert_eq!(ace_spades.order_index(), 51);
    }

    #[test]
    fn from_index_round_trips_every_card() {
        for i in 0..DECK_SIZE as u8 {
            assert_eq!(Card::from_index(i).unwrap().order_index(), i);
        }
        assert_eq!(Card::from_index(52), Err(CardError::IndexOutOfRange(52)));
    }

    #[test]
    fn out_of_range_ordinals_are_rejected() {
        assert_eq!(Card::try_new(13, 0), Err(CardError::RankOutOfRange(13)));
        assert_eq!(Card::try_new(0, 4), Err(CardError::SuitOutOfRange(4)));
    }

    #[test]
    fn derived_ord_agrees_with_compare() {
        let two_diamonds = Card::try_new(0, 1).unwrap();
        let ace_clubs = Card::try_new(12, 0).unwrap();
        assert_eq!(Card::compare(&ace_clubs, &two_diamonds), Ordering::Less);
        assert!(ace_clubs < two_diamonds);
        assert_eq!(Card::compare(&ace_clubs, &ace_clubs), Ordering::Equal);
    }

    #[test]
    fn names_use_single_char_ranks() {
        let ten_hearts = Card {
            suit: Suit::Hearts,
            rank: Rank::Ten,
        };
        assert_eq!(ten_hearts.name(), "X♥");
        assert_eq!(ten_hearts.to_string(), "X♥");
        assert_eq!(Card::try_new(0, 0).unwrap().name(), "2♣");
    }
}
