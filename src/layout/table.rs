//! Table geometry in a fixed logical coordinate space.
//!
//! Everything is laid out in a 1200×820 logical canvas regardless of the
//! on-screen size; [`Layout::to_logical`] maps pointer coordinates into it.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::core::state::GameState;
use crate::rules::can_drag;
use crate::tableau::COLUMN_COUNT;

/// A position in logical coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle, e.g. the canvas bounds on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict containment; points on the border are outside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    /// The stock pile (only while it has cards).
    Stock,
    /// A card that starts a draggable run.
    Card { column: usize, index: usize },
}

/// Table geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Logical canvas width.
    pub width: f32,
    /// Logical canvas height.
    pub height: f32,
    pub card_width: f32,
    pub card_height: f32,
    /// Horizontal distance between column origins.
    pub gap_x: f32,
    /// Vertical fan-out between stacked cards.
    pub gap_y: f32,
    /// Origin of the first tableau card.
    pub tableau_origin: Point,
    /// Origin of the stock pile.
    pub stock_origin: Point,
    /// Origin of the completed-sequences pile.
    pub completed_origin: Point,
    /// Vertical offset between stacked completed sequences.
    pub completed_step: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 820.0,
            card_width: 100.0,
            card_height: 145.0,
            gap_x: 110.0,
            gap_y: 30.0,
            tableau_origin: Point::new(50.0, 120.0),
            stock_origin: Point::new(50.0, 20.0),
            completed_origin: Point::new(1050.0, 20.0),
            completed_step: 15.0,
        }
    }
}

impl Layout {
    /// Map a pointer position in screen space into logical coordinates,
    /// given where the canvas sits on screen.
    #[must_use]
    pub fn to_logical(&self, client: Point, bounds: Rect) -> Point {
        let sx = if bounds.width > 0.0 { self.width / bounds.width } else { 1.0 };
        let sy = if bounds.height > 0.0 { self.height / bounds.height } else { 1.0 };
        Point::new((client.x - bounds.x) * sx, (client.y - bounds.y) * sy)
    }

    /// Left edge of a column.
    #[must_use]
    pub fn column_x(&self, column: usize) -> f32 {
        self.tableau_origin.x + column as f32 * self.gap_x
    }

    /// Top-left corner of the card at `index` in `column`.
    #[must_use]
    pub fn card_origin(&self, column: usize, index: usize) -> Point {
        Point::new(
            self.column_x(column),
            self.tableau_origin.y + index as f32 * self.gap_y,
        )
    }

    /// Bounds of the card at `index` in `column`.
    #[must_use]
    pub fn card_rect(&self, column: usize, index: usize) -> Rect {
        let origin = self.card_origin(column, index);
        Rect::new(origin.x, origin.y, self.card_width, self.card_height)
    }

    #[must_use]
    pub fn stock_rect(&self) -> Rect {
        Rect::new(
            self.stock_origin.x,
            self.stock_origin.y,
            self.card_width,
            self.card_height,
        )
    }

    /// Where the completed sequence in `slot` is drawn.
    #[must_use]
    pub fn completed_slot(&self, slot: usize) -> Point {
        Point::new(
            self.completed_origin.x,
            self.completed_origin.y + slot as f32 * self.completed_step,
        )
    }

    /// Resolve a press.
    ///
    /// The stock wins while it has cards. Otherwise each column is scanned
    /// from its top card down and the first card under the pointer that
    /// starts a draggable run is returned.
    #[must_use]
    pub fn hit_test(&self, p: Point, state: &GameState) -> Option<Hit> {
        if state.stock_len() > 0 && self.stock_rect().contains(p) {
            return Some(Hit::Stock);
        }
        state.tableau().iter().enumerate().find_map(|(column, pile)| {
            (0..pile.len())
                .rev()
                .find(|&index| self.card_rect(column, index).contains(p) && can_drag(pile, index))
                .map(|index| Hit::Card { column, index })
        })
    }

    /// Column under the horizontal center of a dragged run whose left edge
    /// is at `left_x`, excluding the source column.
    #[must_use]
    pub fn drop_column(&self, left_x: f32, from: usize) -> Option<usize> {
        let center = left_x + self.card_width / 2.0;
        (0..COLUMN_COUNT).filter(|&c| c != from).find(|&c| {
            let x = self.column_x(c);
            center > x && center < x + self.card_width
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};

    fn state_with(columns: Vec<Vec<Card>>, stock: Vec<Card>) -> GameState {
        GameState::from_layout(columns, stock).unwrap()
    }

    #[test]
    fn test_to_logical() {
        let layout = Layout::default();
        let bounds = Rect::new(100.0, 50.0, 600.0, 410.0);
        let p = layout.to_logical(Point::new(400.0, 255.0), bounds);
        assert_eq!(p, Point::new(600.0, 410.0));
    }

    #[test]
    fn test_card_origin() {
        let layout = Layout::default();
        assert_eq!(layout.card_origin(0, 0), Point::new(50.0, 120.0));
        assert_eq!(layout.card_origin(3, 2), Point::new(380.0, 180.0));
        assert_eq!(layout.completed_slot(2), Point::new(1050.0, 50.0));
    }

    #[test]
    fn test_hit_stock_only_when_not_empty() {
        let layout = Layout::default();
        let p = Point::new(60.0, 30.0);
        let columns = vec![vec![Card::face_up(Rank::Two)]; 10];

        let with_stock = state_with(columns.clone(), vec![Card::new(Rank::Ace)]);
        assert_eq!(layout.hit_test(p, &with_stock), Some(Hit::Stock));

        let empty_stock = state_with(columns, vec![]);
        assert_eq!(layout.hit_test(p, &empty_stock), None);
    }

    #[test]
    fn test_hit_picks_top_most_draggable_card() {
        let layout = Layout::default();
        let mut columns = vec![vec![]; 10];
        columns[1] = vec![
            Card::new(Rank::King),
            Card::face_up(Rank::Nine),
            Card::face_up(Rank::Eight),
        ];
        let state = state_with(columns, vec![]);

        // Overlap of cards 1 and 2: card 2 is on top.
        let overlap = Point::new(170.0, 185.0);
        assert_eq!(layout.hit_test(overlap, &state), Some(Hit::Card { column: 1, index: 2 }));

        // Only card 1 visible strip.
        let strip = Point::new(170.0, 155.0);
        assert_eq!(layout.hit_test(strip, &state), Some(Hit::Card { column: 1, index: 1 }));

        // Face-down card 0.
        let hidden = Point::new(170.0, 125.0);
        assert_eq!(layout.hit_test(hidden, &state), None);
    }

    #[test]
    fn test_hit_skips_non_draggable_to_lower_card() {
        let layout = Layout::default();
        let mut columns = vec![vec![]; 10];
        // 9 then 7: the 7 drags alone, the 9 cannot carry it.
        columns[0] = vec![Card::face_up(Rank::Nine), Card::face_up(Rank::Seven)];
        let state = state_with(columns, vec![]);

        assert_eq!(
            layout.hit_test(Point::new(60.0, 160.0), &state),
            Some(Hit::Card { column: 0, index: 1 })
        );
        assert_eq!(layout.hit_test(Point::new(60.0, 130.0), &state), None);
    }

    #[test]
    fn test_drop_column() {
        let layout = Layout::default();
        // Card dragged so its left edge is at column 4's origin.
        assert_eq!(layout.drop_column(layout.column_x(4), 0), Some(4));
        // Slightly off: center still inside column 4.
        assert_eq!(layout.drop_column(layout.column_x(4) + 40.0, 0), Some(4));
        // Center in the gap between columns.
        assert_eq!(layout.drop_column(layout.column_x(4) + 55.0, 0), None);
        // Over the source column.
        assert_eq!(layout.drop_column(layout.column_x(2), 2), None);
        // Off the table.
        assert_eq!(layout.drop_column(-500.0, 0), None);
    }
}
