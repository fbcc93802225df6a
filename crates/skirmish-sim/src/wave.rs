//! Wave progression state: which level is up, how many creeps are left,
//! and how the campaign scales as it loops.
//!
//! Stored in `SimulationEngine`; the rosters themselves live next to it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::components::Creep;
use skirmish_core::constants::*;

use crate::config::SimConfig;
use crate::pool::BulletPool;

/// Running wave counters tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveState {
    /// Levels cleared since the last restart. Indexes the level set modulo its length.
    pub current_level: u32,
    pub creeps_remaining: usize,
    /// Currency awarded per kill.
    pub kill_reward: u32,
    /// Creep health scalar; +1 every time the level set loops.
    pub health_multiplier: i32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            current_level: 0,
            creeps_remaining: 0,
            kill_reward: CREEP_INITIAL_REWARD,
            health_multiplier: INITIAL_HEALTH_MULTIPLIER,
        }
    }
}

impl WaveState {
    /// Index of the active level within a set of `level_count` levels.
    pub fn level_index(&self, level_count: usize) -> Option<usize> {
        (level_count > 0).then(|| self.current_level as usize % level_count)
    }

    /// Count one kill. Returns true when it was the last creep of the level.
    pub fn record_kill(&mut self) -> bool {
        self.creeps_remaining = self.creeps_remaining.saturating_sub(1);
        self.creeps_remaining == 0
    }

    /// Move to the next level and raise the stakes. Returns true when the
    /// level set looped and creep health went up.
    pub fn advance(&mut self, level_count: usize) -> bool {
        self.current_level += 1;
        self.kill_reward += CREEP_REWARD_STEP;
        let looped = level_count > 0 && self.current_level as usize % level_count == 0;
        if looped {
            self.health_multiplier += 1;
        }
        looped
    }
}

/// Roll whether the creep at roster index `index` opens fire this tick.
///
/// Dead creeps never fire. With `single_live_shot` a creep whose previous
/// shot is still in flight skips the roll entirely.
pub fn creep_should_fire<R: Rng>(
    creep: &Creep,
    index: usize,
    enemy_bullets: &BulletPool,
    rng: &mut R,
    config: &SimConfig,
) -> bool {
    if !creep.is_alive() {
        return false;
    }
    if config.single_live_shot && enemy_bullets.has_live_shot(index) {
        return false;
    }
    rng.gen_range(0..CREEP_FIRE_ROLL_RANGE) < config.fire_chance
}
