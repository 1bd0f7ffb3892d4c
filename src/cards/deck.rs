//! Deck construction and completed King-to-Ace sequences.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, RANK_COUNT};
use crate::core::rng::GameRng;

/// Copies of each rank in a one-suit Spider deck.
pub const DECK_COPIES: usize = 8;

/// Total cards in play.
pub const DECK_SIZE: usize = DECK_COPIES * RANK_COUNT;

/// Build the 104-card deck (8 copies of each rank, all face-down) and
/// shuffle it uniformly.
///
/// The last element is the top of the deck; dealing pops from the end.
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = ordered_deck();
    rng.shuffle(&mut deck);
    deck
}

/// The unshuffled deck, grouped as A..K repeated eight times.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..DECK_COPIES {
        deck.extend(Rank::ALL.iter().map(|&rank| Card::new(rank)));
    }
    deck
}

/// A full King-to-Ace run removed from the tableau.
///
/// Index 0 is the King, index 12 the Ace, matching the order the cards had
/// in their column. Immutable once extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSequence {
    cards: Vec<Card>,
}

impl CompletedSequence {
    /// Wrap 13 cards that were verified to run K down to A.
    pub(crate) fn new(cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), RANK_COUNT);
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
