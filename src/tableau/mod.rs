//! Tableau: the ten playing columns and the drag in flight.
//!
//! ## Key Types
//!
//! - `Column`: ordered pile, last card on top
//! - `Tableau`: exactly ten columns
//! - `DragState`: a run lifted off a column, owned until it lands

pub mod column;
pub mod drag;
#[allow(clippy::module_inception)]
pub mod tableau;

pub use column::Column;
pub use drag::{CarriedRun, DragState};
pub use tableau::{Tableau, COLUMN_COUNT, INITIAL_COLUMN_SIZES};
