//! Game session and pointer input.
//!
//! ## Key Types
//!
//! - `Session`: owns one game, validates gestures, reports `GameEvent`s
//! - `PointerInput`: maps logical pointer positions to session calls

pub mod pointer;
#[allow(clippy::module_inception)]
pub mod session;

pub use pointer::{PointerInput, Press};
pub use session::{GameEvent, Session};
