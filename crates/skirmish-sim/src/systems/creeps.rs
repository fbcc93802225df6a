//! Creep movement system.

use skirmish_core::components::Creep;
use skirmish_patrol::{PatrolBounds, PatrolConfig};

/// Step every alive creep along its patrol, in roster order.
pub fn run(creeps: &mut [Creep], bounds: &PatrolBounds, config: &PatrolConfig) {
    for creep in creeps.iter_mut().filter(|c| c.is_alive()) {
        skirmish_patrol::step(creep, bounds, config);
    }
}
