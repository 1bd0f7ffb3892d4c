//! The ten playing columns.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::column::Column;
use crate::cards::Card;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Cards dealt to each column at the start of a game.
///
/// Columns 0-3 get six cards, columns 4-9 get five: 54 in total.
pub const INITIAL_COLUMN_SIZES: [usize; COLUMN_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Fixed-size collection of [`Column`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    columns: [Column; COLUMN_COUNT],
}

impl Tableau {
    /// Ten empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from exactly ten columns; `None` for any other count.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Option<Self> {
        let columns: [Column; COLUMN_COUNT] = columns.try_into().ok()?;
        Some(Self { columns })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    /// Column at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Iterate columns left to right.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Iterate columns mutably, left to right.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Column> {
        self.columns.iter_mut()
    }

    /// Leftmost empty column, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.is_empty())
    }

    /// Total cards across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum()
    }

    /// Iterate every card, column by column.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|c| c.iter())
    }
}

impl Index<usize> for Tableau {
    type Output = Column;

    fn index(&self, index: usize) -> &Column {
        &self.columns[index]
    }
}

impl IndexMut<usize> for Tableau {
    fn index_mut(&mut self, index: usize) -> &mut Column {
        &mut self.columns[index]
    }
}
