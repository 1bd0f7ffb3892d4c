//! A single interpolated movement between two points.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::easing::Easing;
use crate::layout::Point;

/// Movement from `from` to `to` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: Point,
    pub to: Point,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: Point, to: Point, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress after `elapsed`, clamped to `[0, 1]`.
    ///
    /// A zero-length tween is always complete.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased position after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Point {
        self.from.lerp(self.to, self.easing.apply(self.progress(elapsed)))
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
