//! Table geometry shared by input mapping and animation targets.
//!
//! - `Layout`: fixed logical coordinate system and card positions
//! - `Hit`: what a pointer press landed on
//! - `Point`, `Rect`: basic geometry

pub mod table;

pub use table::{Hit, Layout, Point, Rect};
