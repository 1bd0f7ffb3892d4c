//! Presentation-side animation helpers.
//!
//! ## Key Types
//!
//! - `Easing`: progress curves
//! - `Tween`: one interpolated movement
//! - `Animator`: running animations, fed by session `GameEvent`s
//!
//! Nothing here touches game state.

pub mod animator;
pub mod easing;
#[allow(clippy::module_inception)]
pub mod tween;

pub use animator::{Animation, AnimationId, AnimationKind, Animator};
pub use easing::Easing;
pub use tween::Tween;
