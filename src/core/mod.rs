//! Core engine types: state, moves, RNG, configuration, errors.
//!
//! This module holds the building blocks shared by the rules, the session
//! layer and the presentation helpers.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::{BackColor, CardBack, Color, Gradient, SessionConfig, TableConfig};
pub use error::{ConfigError, EngineError, Result};
pub use rng::GameRng;
pub use state::GameState;
