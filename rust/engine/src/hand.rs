use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, DECK_SIZE, RANKS_PER_SUIT};
use crate::errors::DealError;

/// Number of hands a deck is dealt into.
pub const HAND_COUNT: usize = 4;
/// Cards per hand right after the deal.
pub const HAND_SIZE: usize = RANKS_PER_SUIT;

/// A player's held cards, always sorted ascending by [`Card::order_index`].
///
/// Removing a card never reorders the rest, so the ordering survives every
/// discard round.
///
/// Deserialization goes through [`Hand::from_cards`], so a stored hand in
/// any order comes back sorted.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::from_cards(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl Hand {
    /// Takes ownership of `cards` and sorts them.
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.sort_by(Card::compare);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.binary_search_by(|c| Card::compare(c, card)).is_ok()
    }

    /// Removes the card at `index` by position. `None` once the hand is
    /// empty or when `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(Card::name).collect()
    }
}

/// Splits a 52-card sequence into four contiguous 13-card hands
/// (0..13, 13..26, 26..39, 39..52), each sorted.
pub fn deal_hands(deck: &[Card]) -> Result<[Hand; HAND_COUNT], DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::WrongDeckSize {
            expected: DECK_SIZE,
            actual: deck.len(),
        });
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in deck {
        if !seen.insert(*card) {
            return Err(DealError::DuplicateCard(card.name()));
        }
    }
    Ok(split_unchecked(deck))
}

/// Caller guarantees `deck` is a permutation of the canonical deck.
pub(crate) fn split_unchecked(deck: &[Card]) -> [Hand; HAND_COUNT] {
    let hands: [Hand; HAND_COUNT] = std::array::from_fn(|i| {
        Hand::from_cards(deck[i * HAND_SIZE..(i + 1) * HAND_SIZE].to_vec())
    });
    tracing::debug!(hands = HAND_COUNT, size = HAND_SIZE, "dealt hands");
    hands
}
