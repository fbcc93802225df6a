//! "Get ready" countdown between a level (re)start and play.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::{INITIAL_READY_COUNT, STEPS_IN_SECOND};

/// Ready count plus the ticks left before it drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub ready_count: u32,
    pub steps_left: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            ready_count: INITIAL_READY_COUNT,
            steps_left: STEPS_IN_SECOND,
        }
    }
}

impl Countdown {
    /// Advance one tick. Returns true on the tick the ready count hits zero,
    /// after which the countdown is rewound for the next level.
    pub fn step(&mut self) -> bool {
        self.steps_left = self.steps_left.saturating_sub(1);
        if self.steps_left > 0 {
            return false;
        }

        self.steps_left = STEPS_IN_SECOND;
        self.ready_count = self.ready_count.saturating_sub(1);
        if self.ready_count == 0 {
            *self = Self::default();
            return true;
        }
        false
    }

    /// Ticks until `step` reports completion.
    pub fn ticks_remaining(&self) -> u32 {
        self.ready_count.saturating_sub(1) * STEPS_IN_SECOND + self.steps_left
    }
}
