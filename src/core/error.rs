//! Error types for the session layer and configuration loading.
//!
//! The rules primitives (`can_drag`, `can_drop`, `check_complete`,
//! `deal_stock`, `check_win`) are total and never return these. Errors only
//! surface where an input layer asks for something the current state cannot
//! honour.

use thiserror::Error;

/// Errors raised by engine orchestration (sessions, programmatic moves).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A drag is already in flight; finish it before starting another action.
    #[error("a drag is already in progress")]
    DragInProgress,

    /// `end_drag` was called with nothing being carried.
    #[error("no drag is in progress")]
    NoActiveDrag,

    /// Column index outside the tableau.
    #[error("column {column} is out of range (tableau has {len} columns)")]
    ColumnOutOfRange { column: usize, len: usize },

    /// Card index outside the addressed column.
    #[error("index {index} is out of range for column {column} of length {len}")]
    IndexOutOfRange { column: usize, index: usize, len: usize },

    /// The cards from `index` upward do not form a face-up descending run.
    #[error("cards from index {index} in column {column} cannot be dragged")]
    NotDraggable { column: usize, index: usize },

    /// The target column does not accept the carried run.
    #[error("column {to} does not accept a run from column {from}")]
    IllegalDrop { from: usize, to: usize },

    /// Dealing is blocked while any tableau column is empty.
    #[error("cannot deal while column {column} is empty")]
    EmptyColumn { column: usize },

    /// The stock has no cards left.
    #[error("the stock is empty")]
    StockEmpty,

    /// The game is already won; only restart is accepted.
    #[error("the game is over")]
    GameOver,

    /// A hand-built layout did not have the expected shape.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Errors raised while loading or validating a [`TableConfig`](super::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Color string is not `#rrggbb`.
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    /// Card back name is not one of the shipped assets.
    #[error("unknown card back {0:?}")]
    UnknownCardBack(String),

    /// The JSON document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
