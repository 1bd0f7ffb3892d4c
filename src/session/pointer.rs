//! Pointer gestures: press, move, release.
//!
//! Maps logical pointer positions onto session calls using a [`Layout`].
//! Dragged-card position is tracked here, not in the game state; moving
//! the pointer never touches the rules.

use crate::core::error::Result;
use crate::layout::{Hit, Layout, Point};

use super::session::{GameEvent, Session};

/// Result of a pointer press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Press {
    /// Nothing under the pointer (or the game is already won).
    Ignored,
    /// The stock was clicked and a row dealt.
    Dealt(Vec<GameEvent>),
    /// A run was picked up.
    Picked { column: usize, index: usize },
}

/// Where the carried run is being held.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    /// Pointer position relative to the lead card's top-left corner.
    offset: Point,
    /// Lead card's current top-left corner.
    position: Point,
}

/// Translates pointer events into session calls.
#[derive(Clone, Debug, Default)]
pub struct PointerInput {
    layout: Layout,
    grab: Option<Grab>,
}

impl PointerInput {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self { layout, grab: None }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Top-left corner of the carried run, while dragging.
    #[must_use]
    pub fn drag_position(&self) -> Option<Point> {
        self.grab.map(|g| g.position)
    }

    /// Pointer down at `p` (logical coordinates).
    ///
    /// Errors from the session (for example dealing with an empty column)
    /// are passed through untouched.
    pub fn press(&mut self, session: &mut Session, p: Point) -> Result<Press> {
        if session.is_won() || self.grab.is_some() {
            return Ok(Press::Ignored);
        }
        match self.layout.hit_test(p, session.state()) {
            Some(Hit::Stock) => Ok(Press::Dealt(session.deal()?)),
            Some(Hit::Card { column, index }) => {
                session.begin_drag(column, index)?;
                let origin = self.layout.card_origin(column, index);
                self.grab = Some(Grab {
                    offset: p - origin,
                    position: origin,
                });
                Ok(Press::Picked { column, index })
            }
            None => Ok(Press::Ignored),
        }
    }

    /// Pointer moved to `p`. Only the visual position changes.
    pub fn motion(&mut self, p: Point) {
        if let Some(grab) = self.grab.as_mut() {
            grab.position = p - grab.offset;
        }
    }

    /// Pointer released. Drops onto the column under the run's center, or
    /// returns the run to its source.
    ///
    /// Returns `None` if nothing was being dragged.
    pub fn release(&mut self, session: &mut Session) -> Result<Option<Vec<GameEvent>>> {
        let Some(grab) = self.grab.take() else {
            return Ok(None);
        };
        let Some(from) = session.state().drag().map(|d| d.from()) else {
            return Ok(None);
        };
        let target = self.layout.drop_column(grab.position.x, from);
        session.end_drag(target).map(Some)
    }

    /// Forget any grab, e.g. after a restart.
    pub fn reset(&mut self) {
        self.grab = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};
    use crate::core::state::GameState;

    fn session_with(columns: Vec<Vec<Card>>, stock: Vec<Card>) -> Session {
        Session::from_state(GameState::from_layout(columns, stock).unwrap(), false)
    }

    #[test]
    fn test_press_move_release_drops() {
        let mut columns = vec![vec![Card::face_up(Rank::King)]; 10];
        columns[0] = vec![Card::new(Rank::Ace), Card::face_up(Rank::Four)];
        columns[3] = vec![Card::face_up(Rank::Five)];
        let mut session = session_with(columns, vec![]);
        let mut input = PointerInput::default();
        let layout = input.layout().clone();

        // Grab card 1 of column 0 ten pixels in.
        let grab_at = layout.card_origin(0, 1) + Point::new(10.0, 10.0);
        let press = input.press(&mut session, grab_at).unwrap();
        assert_eq!(press, Press::Picked { column: 0, index: 1 });
        assert_eq!(input.drag_position(), Some(layout.card_origin(0, 1)));

        // Move so the lead card sits over column 3.
        input.motion(layout.card_origin(3, 1) + Point::new(10.0, 10.0));
        assert_eq!(input.drag_position(), Some(layout.card_origin(3, 1)));

        let events = input.release(&mut session).unwrap().unwrap();
        assert_eq!(events[0], GameEvent::Dropped { from: 0, to: 3, count: 1 });
        assert!(events.contains(&GameEvent::Flipped { column: 0 }));
        assert_eq!(session.state().tableau()[3].len(), 2);
        assert!(input.drag_position().is_none());
    }

    #[test]
    fn test_release_over_illegal_column_returns() {
        let mut columns = vec![vec![Card::face_up(Rank::King)]; 10];
        columns[0] = vec![Card::face_up(Rank::Four)];
        let mut session = session_with(columns, vec![]);
        let mut input = PointerInput::default();
        let layout = input.layout().clone();

        input.press(&mut session, layout.card_origin(0, 0) + Point::new(5.0, 5.0)).unwrap();
        input.motion(layout.card_origin(6, 1) + Point::new(5.0, 5.0));
        let events = input.release(&mut session).unwrap().unwrap();

        assert_eq!(events, vec![GameEvent::Returned { column: 0, count: 1 }]);
        assert_eq!(session.state().tableau()[0].len(), 1);
    }

    #[test]
    fn test_press_stock_deals() {
        let columns = vec![vec![Card::face_up(Rank::King)]; 10];
        let mut session = session_with(columns, vec![Card::new(Rank::Two); 10]);
        let mut input = PointerInput::default();

        let press = input.press(&mut session, Point::new(60.0, 30.0)).unwrap();
        assert!(matches!(press, Press::Dealt(ref events) if events[0] == GameEvent::Dealt { count: 10 }));
        assert_eq!(session.state().stock_len(), 0);
    }

    #[test]
    fn test_press_empty_space() {
        let mut session = Session::with_seed(3);
        let mut input = PointerInput::default();
        assert_eq!(input.press(&mut session, Point::new(1190.0, 810.0)).unwrap(), Press::Ignored);
        assert_eq!(input.release(&mut session).unwrap(), None);
    }
}
