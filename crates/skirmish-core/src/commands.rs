//! Player input sent from an input adapter to the simulation.
//!
//! Commands are latched and consumed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Steering;

/// All possible player inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Latest thresholded steering direction; holds until replaced.
    Steer { steering: Steering },
    /// Select button: skip intro, pause/resume, buy, restart.
    Confirm,
    /// Up button: previous shop entry, skip intro.
    NavigateUp,
    /// Down button: next shop entry, skip intro.
    NavigateDown,
}

/// Discrete (button) inputs. At most one is consumed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonPress {
    Confirm,
    NavigateUp,
    NavigateDown,
}

impl PlayerCommand {
    /// The discrete part of the command, if any.
    pub fn button(self) -> Option<ButtonPress> {
        match self {
            Self::Steer { .. } => None,
            Self::Confirm => Some(ButtonPress::Confirm),
            Self::NavigateUp => Some(ButtonPress::NavigateUp),
            Self::NavigateDown => Some(ButtonPress::NavigateDown),
        }
    }
}
