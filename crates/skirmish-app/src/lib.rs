//! SKIRMISH headless driver.
//!
//! Wires the level loader and the simulation engine together: a game loop
//! thread ticks the engine at a fixed rate, a text input adapter feeds it
//! commands, and snapshots go out as JSON lines.

pub mod error;
pub mod game_loop;
pub mod input;
pub mod state;

pub use skirmish_core as core;
pub use error::AppError;
