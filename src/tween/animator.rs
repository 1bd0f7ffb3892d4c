//! Active animations keyed by id.
//!
//! The animator is purely visual. Game state has already changed by the
//! time an animation starts; callers use [`Animator::animating_cards`] to
//! keep the top cards of a column hidden until their flight lands.
//!
//! Time is supplied by the caller as an [`Instant`], so the animator never
//! reads the clock itself.

use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

use super::easing::Easing;
use super::tween::Tween;
use crate::cards::RANK_COUNT;
use crate::core::state::GameState;
use crate::layout::{Layout, Point};
use crate::session::GameEvent;

pub type AnimationId = u64;

/// What an animation shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// A finished King-to-Ace run flying to the completed pile.
    SequenceComplete,
    /// A dropped run settling onto its new column.
    CardDrop,
    /// A rejected run flying back to its source column.
    CardReturn,
    /// A card flying from the stock to a column.
    StockDeal,
}

impl AnimationKind {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            AnimationKind::SequenceComplete => Duration::from_millis(800),
            AnimationKind::CardDrop => Duration::from_millis(300),
            AnimationKind::CardReturn => Duration::from_millis(200),
            AnimationKind::StockDeal => Duration::from_millis(300),
        }
    }

    #[must_use]
    pub fn easing(self) -> Easing {
        match self {
            AnimationKind::SequenceComplete => Easing::EaseInOutCubic,
            AnimationKind::CardDrop | AnimationKind::StockDeal => Easing::EaseOutCubic,
            AnimationKind::CardReturn => Easing::EaseOutBack,
        }
    }
}

/// One running animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub kind: AnimationKind,
    /// Column the cards land on, or leave for `SequenceComplete`.
    pub column: usize,
    /// Number of cards moving together.
    pub count: usize,
    pub tween: Tween,
    pub started: Instant,
}

impl Animation {
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    #[must_use]
    pub fn position(&self, now: Instant) -> Point {
        self.tween.sample(self.elapsed(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween.is_finished(self.elapsed(now))
    }

    /// Whether the moving cards are still part of `column` in the state.
    fn lands_on(&self, column: usize) -> bool {
        self.column == column && self.kind != AnimationKind::SequenceComplete
    }
}

/// Collection of running animations.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    active: FxHashMap<AnimationId, Animation>,
    next_id: AnimationId,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.active.get(&id)
    }

    /// Current position of an animation, if it is still running.
    #[must_use]
    pub fn position(&self, id: AnimationId, now: Instant) -> Option<Point> {
        self.active.get(&id).map(|a| a.position(now))
    }

    /// Running animations in start order.
    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &Animation)> {
        let mut entries: Vec<_> = self.active.iter().map(|(&id, a)| (id, a)).collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    /// Start an animation of `kind` moving `count` cards from `from` to `to`.
    pub fn spawn(
        &mut self,
        kind: AnimationKind,
        column: usize,
        count: usize,
        from: Point,
        to: Point,
        now: Instant,
    ) -> AnimationId {
        let id = self.next_id;
        self.next_id += 1;
        let tween = Tween::new(from, to, kind.duration()).with_easing(kind.easing());
        self.active.insert(
            id,
            Animation {
                kind,
                column,
                count,
                tween,
                started: now,
            },
        );
        id
    }

    /// Remove and return every animation finished at `now`, in start order.
    pub fn update(&mut self, now: Instant) -> Vec<(AnimationId, Animation)> {
        let mut done: Vec<AnimationId> = self
            .active
            .iter()
            .filter(|(_, a)| a.is_finished(now))
            .map(|(&id, _)| id)
            .collect();
        done.sort_unstable();
        done.into_iter()
            .filter_map(|id| self.active.remove(&id).map(|a| (id, a)))
            .collect()
    }

    /// Drop everything, e.g. on restart.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// How many of the top cards of `column` are still in flight and should
    /// not be drawn in place yet.
    #[must_use]
    pub fn animating_cards(&self, column: usize) -> usize {
        self.active
            .values()
            .filter(|a| a.lands_on(column))
            .map(|a| a.count)
            .sum()
    }

    /// Start animations for the events of one session call.
    ///
    /// `state` is the state after the call. `drag_origin` is where the
    /// carried run was released, if the call came from a pointer drag.
    /// A drop or deal onto a column that then completed a sequence is not
    /// animated separately; the sequence flight covers it.
    pub fn on_events(
        &mut self,
        events: &[GameEvent],
        layout: &Layout,
        state: &GameState,
        drag_origin: Option<Point>,
        now: Instant,
    ) -> Vec<AnimationId> {
        let completed_on = |column: usize| {
            events
                .iter()
                .any(|e| matches!(e, GameEvent::SequenceCompleted { column: c, .. } if *c == column))
        };
        let column_len = |column: usize| state.column(column).map_or(0, |c| c.len());

        let mut spawned = Vec::new();
        for event in events {
            match *event {
                GameEvent::NewGame { .. } => {
                    self.clear();
                    spawned.clear();
                }
                GameEvent::Dropped { from, to, count } => {
                    if completed_on(to) {
                        continue;
                    }
                    let start = drag_origin.unwrap_or_else(|| layout.card_origin(from, column_len(from)));
                    let landing = layout.card_origin(to, column_len(to).saturating_sub(count));
                    spawned.push(self.spawn(AnimationKind::CardDrop, to, count, start, landing, now));
                }
                GameEvent::Returned { column, count } => {
                    let Some(start) = drag_origin else { continue };
                    let landing = layout.card_origin(column, column_len(column).saturating_sub(count));
                    spawned.push(self.spawn(AnimationKind::CardReturn, column, count, start, landing, now));
                }
                GameEvent::Dealt { count } => {
                    for column in (0..count).filter(|&c| !completed_on(c)) {
                        let landing = layout.card_origin(column, column_len(column).saturating_sub(1));
                        spawned.push(self.spawn(
                            AnimationKind::StockDeal,
                            column,
                            1,
                            layout.stock_origin,
                            landing,
                            now,
                        ));
                    }
                }
                GameEvent::SequenceCompleted { column, slot } => {
                    let start = layout.card_origin(column, column_len(column));
                    spawned.push(self.spawn(
                        AnimationKind::SequenceComplete,
                        column,
                        RANK_COUNT,
                        start,
                        layout.completed_slot(slot),
                        now,
                    ));
                }
                GameEvent::Flipped { .. } | GameEvent::Won => {}
            }
        }
        if !spawned.is_empty() {
            log::trace!("started {} animation(s)", spawned.len());
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_kind_durations() {
        assert_eq!(AnimationKind::SequenceComplete.duration(), ms(800));
        assert_eq!(AnimationKind::CardDrop.duration(), ms(300));
        assert_eq!(AnimationKind::CardReturn.duration(), ms(200));
        assert_eq!(AnimationKind::StockDeal.duration(), ms(300));
    }

    #[test]
    fn test_update_returns_finished_in_order() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let a = animator.spawn(AnimationKind::CardReturn, 0, 1, Point::default(), Point::new(10.0, 0.0), t0);
        let b = animator.spawn(AnimationKind::CardDrop, 1, 2, Point::default(), Point::new(10.0, 0.0), t0);
        let c = animator.spawn(AnimationKind::SequenceComplete, 2, 13, Point::default(), Point::new(10.0, 0.0), t0);

        assert!(animator.update(t0 + ms(100)).is_empty());

        let finished: Vec<_> = animator.update(t0 + ms(300)).into_iter().map(|(id, _)| id).collect();
        assert_eq!(finished, vec![a, b]);
        assert_eq!(animator.len(), 1);
        assert!(animator.get(c).is_some());

        assert_eq!(animator.update(t0 + ms(800)).len(), 1);
        assert!(animator.is_empty());
    }

    #[test]
    fn test_position_follows_tween() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let id = animator.spawn(AnimationKind::CardDrop, 0, 1, Point::new(0.0, 0.0), Point::new(90.0, 30.0), t0);
        assert_eq!(animator.position(id, t0), Some(Point::new(0.0, 0.0)));
        assert_eq!(animator.position(id, t0 + ms(1000)), Some(Point::new(90.0, 30.0)));
        animator.clear();
        assert_eq!(animator.position(id, t0), None);
    }

    #[test]
    fn test_animating_cards_ignores_sequence_flights() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        animator.spawn(AnimationKind::CardDrop, 4, 3, Point::default(), Point::default(), t0);
        animator.spawn(AnimationKind::StockDeal, 4, 1, Point::default(), Point::default(), t0);
        animator.spawn(AnimationKind::SequenceComplete, 4, 13, Point::default(), Point::default(), t0);
        assert_eq!(animator.animating_cards(4), 4);
        assert_eq!(animator.animating_cards(5), 0);
    }

    #[test]
    fn test_on_events_drop_lands_on_target() {
        let layout = Layout::default();
        let mut columns = vec![vec![Card::face_up(Rank::King)]; 10];
        columns[2] = vec![Card::face_up(Rank::King), Card::face_up(Rank::Six), Card::face_up(Rank::Five)];
        let state = GameState::from_layout(columns, vec![]).unwrap();
        let t0 = Instant::now();

        let mut animator = Animator::new();
        let origin = Point::new(500.0, 400.0);
        let events = [GameEvent::Dropped { from: 0, to: 2, count: 1 }];
        let ids = animator.on_events(&events, &layout, &state, Some(origin), t0);

        assert_eq!(ids.len(), 1);
        let anim = animator.get(ids[0]).unwrap();
        assert_eq!(anim.kind, AnimationKind::CardDrop);
        assert_eq!(anim.tween.from, origin);
        assert_eq!(anim.tween.to, layout.card_origin(2, 2));
    }

    #[test]
    fn test_on_events_skips_drop_that_completed() {
        let layout = Layout::default();
        let state = GameState::from_layout(vec![vec![]; 10], vec![]).unwrap();
        let events = [
            GameEvent::Dropped { from: 0, to: 1, count: 1 },
            GameEvent::SequenceCompleted { column: 1, slot: 0 },
        ];
        let mut animator = Animator::new();
        let ids = animator.on_events(&events, &layout, &state, Some(Point::default()), Instant::now());

        assert_eq!(ids.len(), 1);
        let anim = animator.get(ids[0]).unwrap();
        assert_eq!(anim.kind, AnimationKind::SequenceComplete);
        assert_eq!(anim.count, 13);
        assert_eq!(anim.tween.to, layout.completed_slot(0));
    }

    #[test]
    fn test_on_events_deal_and_restart() {
        let layout = Layout::default();
        let state = GameState::from_layout(vec![vec![Card::face_up(Rank::Two)]; 10], vec![]).unwrap();
        let t0 = Instant::now();
        let mut animator = Animator::new();

        let ids = animator.on_events(&[GameEvent::Dealt { count: 10 }], &layout, &state, None, t0);
        assert_eq!(ids.len(), 10);
        assert!(ids
            .iter()
            .all(|&id| animator.get(id).unwrap().tween.from == layout.stock_origin));

        let ids = animator.on_events(&[GameEvent::NewGame { seed: 1 }], &layout, &state, None, t0);
        assert!(ids.is_empty());
        assert!(animator.is_empty());
    }

    #[test]
    fn test_return_without_drag_origin_is_not_animated() {
        let layout = Layout::default();
        let state = GameState::from_layout(vec![vec![Card::face_up(Rank::Two)]; 10], vec![]).unwrap();
        let mut animator = Animator::new();
        let events = [GameEvent::Returned { column: 0, count: 1 }];
        assert!(animator.on_events(&events, &layout, &state, None, Instant::now()).is_empty());
    }
}
