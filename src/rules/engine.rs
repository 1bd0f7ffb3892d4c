//! Rules engine trait.
//!
//! A rules implementation defines:
//! - What moves are legal in a state
//! - How a move changes the state
//! - When the game is over

use crate::core::action::Move;
use crate::core::error::Result;
use crate::core::state::GameState;

use super::spider::MoveOutcome;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every sequence was completed and the stock is empty.
    Won,
    /// No legal move remains.
    Stalled,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if nothing can be played
/// - `apply_move`: Must be deterministic; rejects illegal moves without
///   touching the state
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Enumerate every legal move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Apply a move, returning what it completed and flipped.
    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `mv` is currently legal.
    fn is_legal(&self, state: &GameState, mv: &Move) -> bool {
        self.legal_moves(state).contains(mv)
    }
}
