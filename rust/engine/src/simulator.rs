//! Random-discard simulation.
//!
//! Starting from four dealt hands, every round removes one card from each
//! hand (hand 0 first, then 1, 2, 3) at a position chosen by a
//! [`DiscardPicker`], and records a snapshot of all four hands. After
//! [`DISCARD_ROUNDS`] rounds every hand is empty.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::DealError;
use crate::hand::{Hand, HAND_COUNT, HAND_SIZE};

/// Discard rounds after the deal; one per card in a hand.
pub const DISCARD_ROUNDS: usize = HAND_SIZE;
/// Snapshots in a full trace, the deal included.
pub const TRACE_LEN: usize = DISCARD_ROUNDS + 1;

/// Chooses which position a hand discards from.
pub trait DiscardPicker {
    /// Returns an index in `0..remaining` for hand number `hand`.
    fn pick(&mut self, hand: usize, remaining: usize) -> usize;
}

/// Uniform positions drawn from any `rand` generator.
#[derive(Debug)]
pub struct RandomPicker<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomPicker<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiscardPicker for RandomPicker<'_, R> {
    fn pick(&mut self, _hand: usize, remaining: usize) -> usize {
        self.rng.random_range(0..remaining)
    }
}

/// Always discards the lowest card.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestCardPicker;

impl DiscardPicker for LowestCardPicker {
    fn pick(&mut self, _hand: usize, _remaining: usize) -> usize {
        0
    }
}

/// Snapshot of the four hands after a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub hands: [Hand; HAND_COUNT],
    /// Card each hand gave up this round; `None` for the deal.
    #[serde(default)]
    pub discarded: Option<[Card; HAND_COUNT]>,
}

/// Ordered snapshots from the deal until every hand is empty.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameTrace {
    rounds: Vec<Round>,
}

impl GameTrace {
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The dealt hands, before any discard.
    pub fn initial(&self) -> Option<&Round> {
        self.rounds.first()
    }

    /// Discarded cards of one hand, in discard order.
    pub fn discards_of(&self, hand: usize) -> Vec<Card> {
        self.rounds
            .iter()
            .filter_map(|r| r.discarded.map(|d| d[hand]))
            .collect()
    }

    pub fn into_rounds(self) -> Vec<Round> {
        self.rounds
    }
}

/// Runs the discard rounds over `hands`, consuming them. Every hand must
/// hold exactly [`HAND_SIZE`] cards.
pub fn simulate<P: DiscardPicker + ?Sized>(
    hands: [Hand; HAND_COUNT],
    picker: &mut P,
) -> Result<GameTrace, DealError> {
    if let Some((hand, h)) = hands.iter().enumerate().find(|(_, h)| h.len() != HAND_SIZE) {
        return Err(DealError::WrongHandSize {
            hand,
            expected: HAND_SIZE,
            actual: h.len(),
        });
    }
    Ok(run_rounds(hands, picker))
}

/// Caller guarantees every hand holds [`HAND_SIZE`] cards.
pub(crate) fn run_rounds<P: DiscardPicker + ?Sized>(
    mut hands: [Hand; HAND_COUNT],
    picker: &mut P,
) -> GameTrace {
    let mut rounds = Vec::with_capacity(TRACE_LEN);
    rounds.push(Round {
        hands: hands.clone(),
        discarded: None,
    });

    for round in 0..DISCARD_ROUNDS {
        let remaining = HAND_SIZE - round;
        let mut discarded = Vec::with_capacity(HAND_COUNT);
        for (h, hand) in hands.iter_mut().enumerate() {
            // out-of-range picks fall back to the last position
            let index = picker.pick(h, remaining).min(remaining - 1);
            if let Some(card) = hand.remove_at(index) {
                tracing::trace!(round, hand = h, index, card = %card, "discard");
                discarded.push(card);
            }
        }
        rounds.push(Round {
            hands: hands.clone(),
            discarded: <[Card; HAND_COUNT]>::try_from(discarded).ok(),
        });
    }

    tracing::debug!(rounds = rounds.len(), "simulation finished");
    GameTrace { rounds }
}
