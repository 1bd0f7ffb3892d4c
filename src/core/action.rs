//! Move representation and history records.
//!
//! A Spider turn is one of two things: deal a row from the stock, or move a
//! face-up run from one column onto another. Moves carry column/card
//! indices only; legality is decided by the rules against a state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Deal one card from the stock onto every column.
    Deal,

    /// Move the run starting at `start` in column `from` onto column `to`.
    Run { from: usize, start: usize, to: usize },
}

impl Move {
    /// Shorthand for [`Move::Run`].
    #[must_use]
    pub const fn run(from: usize, start: usize, to: usize) -> Self {
        Move::Run { from, start, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Deal => f.write_str("deal"),
            Move::Run { from, start, to } => write!(f, "{from}[{start}..] -> {to}"),
        }
    }
}

/// A move that was applied, with bookkeeping for replay and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move taken.
    pub mv: Move,

    /// Position in the game's move order, starting at 0.
    pub sequence: u32,

    /// Sequences completed as a direct result of this move.
    pub completed: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, sequence: u32, completed: u8) -> Self {
        Self {
            mv,
            sequence,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Deal.to_string(), "deal");
        assert_eq!(Move::run(2, 4, 7).to_string(), "2[4..] -> 7");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::run(0, 3, 9);
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }

    #[test]
    fn test_record_new() {
        let record = MoveRecord::new(Move::Deal, 5, 1);
        assert_eq!(record.mv, Move::Deal);
        assert_eq!(record.sequence, 5);
        assert_eq!(record.completed, 1);
    }
}
