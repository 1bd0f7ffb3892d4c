//! Game state: the aggregate root of one Spider game.
//!
//! ## GameState
//!
//! - Tableau (10 columns)
//! - Stock (face-down, last card dealt next)
//! - Completed King-to-Ace sequences
//! - The drag in flight, if any
//! - Move history
//!
//! Created once per game by [`init_game`](crate::rules::init_game), mutated
//! only by the rules and the session, discarded wholesale on restart.
//!
//! Card conservation: stock + tableau + completed + carried cards always
//! total 104 for a dealt game ([`GameState::total_cards`]).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::{Move, MoveRecord};
use super::error::{EngineError, Result};
use super::rng::GameRng;
use crate::cards::{Card, CompletedSequence, RANK_COUNT};
use crate::tableau::{Column, DragState, Tableau, COLUMN_COUNT};

/// Full state of one game.
///
/// Uses an `im` vector for the history so snapshots stay cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    tableau: Tableau,

    /// Undealt cards; the last element is the top.
    stock: Vec<Card>,

    completed: Vec<CompletedSequence>,

    drag: Option<DragState>,

    history: Vector<MoveRecord>,
}

impl GameState {
    /// Deal a fresh game from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        crate::rules::init_game(&mut GameRng::new(seed))
    }

    pub(crate) fn from_parts(tableau: Tableau, stock: Vec<Card>) -> Self {
        Self {
            tableau,
            stock,
            completed: Vec::new(),
            drag: None,
            history: Vector::new(),
        }
    }

    /// Build a state from explicit piles, bottom card first in each column
    /// and top of stock last. Used for puzzles and tests.
    pub fn from_layout(columns: Vec<Vec<Card>>, stock: Vec<Card>) -> Result<Self> {
        let count = columns.len();
        let columns = columns.into_iter().map(Column::from_cards).collect();
        let tableau = Tableau::from_columns(columns).ok_or_else(|| {
            EngineError::InvalidLayout(format!("expected {COLUMN_COUNT} columns, got {count}"))
        })?;
        Ok(Self::from_parts(tableau, stock))
    }

    // === Read access ===

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Column at `index`, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Number of complete King-to-Ace sequences removed so far.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn completed_sequences(&self) -> &[CompletedSequence] {
        &self.completed
    }

    /// The drag in flight, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cards held anywhere in this state.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.tableau.card_count()
            + self.completed.len() * RANK_COUNT
            + self.drag.as_ref().map_or(0, |d| d.cards().len())
    }

    // === Mutation (rules and session only) ===

    pub(crate) fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    /// Tableau and stock borrowed together, for dealing.
    pub(crate) fn tableau_and_stock_mut(&mut self) -> (&mut Tableau, &mut Vec<Card>) {
        (&mut self.tableau, &mut self.stock)
    }

    pub(crate) fn push_completed(&mut self, sequence: CompletedSequence) {
        self.completed.push(sequence);
    }

    pub(crate) fn set_drag(&mut self, drag: DragState) {
        self.drag = Some(drag);
    }

    pub(crate) fn take_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Append a history record for `mv`.
    pub(crate) fn record(&mut self, mv: Move, completed: usize) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        let completed = u8::try_from(completed).unwrap_or(u8::MAX);
        self.history.push_back(MoveRecord::new(mv, sequence, completed));
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "stock: {}  completed: {}",
            self.stock.len(),
            self.completed.len()
        )?;
        for (i, column) in self.tableau.iter().enumerate() {
            write!(f, "{i}:")?;
            for card in column.iter() {
                write!(f, " {card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_from_layout_requires_ten_columns() {
        let err = GameState::from_layout(vec![vec![]; 9], vec![]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidLayout("expected 10 columns, got 9".to_string())
        );

        let state = GameState::from_layout(vec![vec![]; 10], vec![Card::new(Rank::Ace)]).unwrap();
        assert_eq!(state.stock_len(), 1);
        assert_eq!(state.completed_count(), 0);
        assert!(state.drag().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_total_cards_counts_every_container() {
        let mut columns = vec![vec![]; 10];
        columns[0] = vec![Card::face_up(Rank::Five), Card::face_up(Rank::Four)];
        let mut state = GameState::from_layout(columns, vec![Card::new(Rank::Two)]).unwrap();
        assert_eq!(state.total_cards(), 3);

        let carried = state.tableau_mut()[0].split_off(1);
        state.set_drag(DragState::new(carried.into_iter().collect(), 0, vec![]));
        assert_eq!(state.total_cards(), 3);
    }

    #[test]
    fn test_record_sequences() {
        let mut state = GameState::from_layout(vec![vec![]; 10], vec![]).unwrap();
        state.record(Move::Deal, 0);
        state.record(Move::run(1, 0, 2), 1);

        let records: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(records[0].sequence, 0);
        assert_eq!(records[1].sequence, 1);
        assert_eq!(records[1].completed, 1);
    }

    #[test]
    fn test_display() {
        let mut columns = vec![vec![]; 10];
        columns[2] = vec![Card::new(Rank::Nine), Card::face_up(Rank::Queen)];
        let state = GameState::from_layout(columns, vec![Card::new(Rank::Ace)]).unwrap();
        let text = state.to_string();
        assert!(text.starts_with("stock: 1  completed: 0\n"));
        assert!(text.contains("2: ## Q\n"));
        assert!(text.contains("9:\n"));
    }

    #[test]
    fn test_new_is_deterministic() {
        assert_eq!(GameState::new(77), GameState::new(77));
        assert_ne!(GameState::new(77), GameState::new(78));
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = GameState::new(3);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
