//! Creep patrol engine for SKIRMISH.
//!
//! Drives each creep through its cyclic list of movement rules:
//! one step per tick, advancing to the next rule when the current one
//! hits a wall or has covered its distance.

pub mod cycle;
pub mod walls;

pub use skirmish_core as core;

pub use cycle::{step, PatrolConfig, StepOutcome};
pub use walls::PatrolBounds;
