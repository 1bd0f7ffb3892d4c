//! Spider rules.
//!
//! - `engine`: the `RulesEngine` trait (legal moves, apply, terminal check)
//! - `spider`: the one-suit Spider primitives and `SpiderRules`
//!
//! The primitives (`init_game`, `can_drag`, `can_drop`, `check_complete`,
//! `deal_stock`, `check_win`) never fail. Validation and the follow-up
//! bookkeeping live in `SpiderRules` and the session layer.

pub mod engine;
pub mod spider;

pub use engine::{GameResult, RulesEngine};
pub use spider::{
    can_drag, can_drop, check_complete, check_win, deal_stock, init_game, resolve_column,
    valid_drops, MoveOutcome, Resolution, SpiderRules,
};
