//! A single tableau pile.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::cards::Card;

/// An ordered pile of cards. The last element is the top of the pile, the
/// card nearest the player.
///
/// Dereferences to `[Card]` for read access; mutation goes through the
/// methods below so the rules code stays the only writer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put several cards on top, preserving their order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Remove and return the cards from `index` to the top.
    ///
    /// Panics if `index > len`; callers validate indices first.
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns true if a card was flipped.
    pub fn flip_top(&mut self) -> bool {
        self.cards.last_mut().is_some_and(Card::reveal)
    }

    /// Index where the draggable run ending at the top begins.
    ///
    /// `None` for an empty column or a face-down top card.
    #[must_use]
    pub fn run_start(&self) -> Option<usize> {
        let top = self.cards.last()?;
        if !top.face_up {
            return None;
        }
        let mut start = self.cards.len() - 1;
        while start > 0 {
            let below = &self.cards[start - 1];
            if !below.face_up || !below.rank().is_one_above(self.cards[start].rank()) {
                break;
            }
            start -= 1;
        }
        Some(start)
    }
}

impl Deref for Column {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Column {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
