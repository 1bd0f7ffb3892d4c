//! # spider-engine
//!
//! Game-state engine for one-suit Spider Solitaire played with eight decks
//! of Spades (104 cards, ten columns, a 50-card stock).
//!
//! ## Design Principles
//!
//! 1. **Total primitives**: the core rule functions (`init_game`,
//!    `can_drag`, `can_drop`, `check_complete`, `deal_stock`, `check_win`)
//!    never fail. Validation lives one layer up.
//!
//! 2. **Immediate state, lagging visuals**: every call mutates the state at
//!    once and reports `GameEvent`s; animation is layered on top and never
//!    holds up the rules.
//!
//! 3. **Deterministic deals**: a seeded `GameRng` reproduces a deal exactly.
//!
//! ## Modules
//!
//! - `core`: state, moves, errors, RNG, configuration
//! - `cards`: ranks, cards, the 104-card deck
//! - `tableau`: columns and the drag in flight
//! - `rules`: Spider primitives and the `RulesEngine` implementation
//! - `session`: gesture orchestration and pointer input
//! - `layout`: logical table geometry and hit testing
//! - `tween`: easing, tweens and the animator

pub mod core;
pub mod cards;
pub mod tableau;
pub mod rules;
pub mod session;
pub mod layout;
pub mod tween;

// Re-export commonly used types
pub use crate::core::{
    BackColor, CardBack, Color, ConfigError, EngineError, GameRng, GameState,
    Gradient, Move, MoveRecord, Result, SessionConfig, TableConfig,
};

pub use crate::cards::{create_deck, Card, CompletedSequence, Rank, Suit, DECK_SIZE, RANK_COUNT};

pub use crate::tableau::{Column, DragState, Tableau, COLUMN_COUNT};

pub use crate::rules::{
    can_drag, can_drop, check_complete, check_win, deal_stock, init_game, resolve_column,
    GameResult, MoveOutcome, RulesEngine, SpiderRules,
};

pub use crate::session::{GameEvent, PointerInput, Press, Session};

pub use crate::layout::{Hit, Layout, Point, Rect};

pub use crate::tween::{Animation, AnimationId, AnimationKind, Animator, Easing, Tween};
