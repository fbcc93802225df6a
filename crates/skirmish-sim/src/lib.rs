//! Simulation engine for SKIRMISH.
//!
//! Owns the game session, runs systems at a fixed tick rate,
//! and produces `GameSnapshot`s for whatever renders them.

pub mod config;
pub mod economy;
pub mod engine;
pub mod input;
pub mod pool;
pub mod systems;
pub mod wave;

pub use skirmish_core as core;
pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use pool::BulletPool;

#[cfg(test)]
mod tests;
