//! Per-tick systems run by the engine.
//!
//! Systems are plain functions over the pieces of state they touch.
//! They do not own state; the engine does.

pub mod collision;
pub mod countdown;
pub mod creeps;
pub mod fire;
pub mod ship;
pub mod snapshot;
