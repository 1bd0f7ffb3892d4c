//! Cards in flight between pick-up and drop.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tableau::COLUMN_COUNT;
use crate::cards::{Card, RANK_COUNT};
use crate::core::error::EngineError;

/// Carried cards. A run never exceeds K..A, so it stays inline.
pub type CarriedRun = SmallVec<[Card; RANK_COUNT]>;

/// Transient state of a drag.
///
/// Owns the carried cards exclusively until the drop lands them on a target
/// column or they go back to `from`. Deserializing rejects column indices
/// outside the tableau, so `from` always names a real column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DragSnapshot")]
pub struct DragState {
    cards: CarriedRun,
    from: usize,
    valid_drops: Vec<usize>,
}

impl DragState {
    pub(crate) fn new(cards: CarriedRun, from: usize, valid_drops: Vec<usize>) -> Self {
        Self {
            cards,
            from,
            valid_drops,
        }
    }

    /// The carried run, lead card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that must fit onto the target column.
    #[must_use]
    pub fn lead(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Source column index.
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Columns that accept the run. Empty unless assist mode was on when
    /// the drag started.
    #[must_use]
    pub fn valid_drops(&self) -> &[usize] {
        &self.valid_drops
    }

    pub(crate) fn into_cards(self) -> CarriedRun {
        self.cards
    }
}

/// Unchecked wire form of a [`DragState`].
#[derive(Deserialize)]
struct DragSnapshot {
    cards: CarriedRun,
    from: usize,
    valid_drops: Vec<usize>,
}

impl TryFrom<DragSnapshot> for DragState {
    type Error = EngineError;

    fn try_from(raw: DragSnapshot) -> Result<Self, Self::Error> {
        let out_of_range = std::iter::once(raw.from)
            .chain(raw.valid_drops.iter().copied())
            .find(|&column| column >= COLUMN_COUNT);
        if let Some(column) = out_of_range {
            return Err(EngineError::ColumnOutOfRange {
                column,
                len: COLUMN_COUNT,
            });
        }
        Ok(Self::new(raw.cards, raw.from, raw.valid_drops))
    }
}
