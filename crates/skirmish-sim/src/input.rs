//! Input latched between ticks.

use skirmish_core::commands::{ButtonPress, PlayerCommand};
use skirmish_core::enums::Steering;

/// Holds the last steering direction and at most one pending button.
///
/// Steering is a level signal and persists until replaced. A button is
/// consumed by the next tick; a newer press replaces an unconsumed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    steering: Steering,
    pending: Option<ButtonPress>,
}

impl InputLatch {
    pub fn latch(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Steer { steering } => self.steering = steering,
            other => self.pending = other.button(),
        }
    }

    /// Steering for this tick plus the pending button, which is cleared.
    pub fn take(&mut self) -> (Steering, Option<ButtonPress>) {
        (self.steering, self.pending.take())
    }

    pub fn steering(&self) -> Steering {
        self.steering
    }

    pub fn pending(&self) -> Option<ButtonPress> {
        self.pending
    }
}
