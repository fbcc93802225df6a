//! Runtime configuration for a simulation session.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::CREEP_FIRE_CHANCE;
use skirmish_core::enums::{BottomExitPolicy, DistanceComparison};
use skirmish_core::types::PlayField;
use skirmish_patrol::PatrolConfig;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Start on the intro screen instead of going straight to the countdown.
    pub show_intro: bool,
    pub distance_comparison: DistanceComparison,
    pub bottom_exit: BottomExitPolicy,
    /// Per-tick fire chance of an eligible creep, out of `CREEP_FIRE_ROLL_RANGE`.
    pub fire_chance: u32,
    /// A creep may not fire while one of its shots is still live.
    pub single_live_shot: bool,
    pub field: PlayField,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            show_intro: true,
            distance_comparison: DistanceComparison::default(),
            bottom_exit: BottomExitPolicy::default(),
            fire_chance: CREEP_FIRE_CHANCE,
            single_live_shot: true,
            field: PlayField::default(),
        }
    }
}

impl SimConfig {
    pub fn patrol(&self) -> PatrolConfig {
        PatrolConfig {
            comparison: self.distance_comparison,
            bottom_exit: self.bottom_exit,
        }
    }
}
