//! Rule cycling: one movement step for one creep.
//!
//! Pure function over plain data. No pools, no RNG, no session state.

use tracing::trace;

use skirmish_core::components::Creep;
use skirmish_core::enums::{BottomExitPolicy, DistanceComparison, Termination};

use crate::walls::PatrolBounds;

/// Policy knobs that differ between game variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatrolConfig {
    pub comparison: DistanceComparison,
    pub bottom_exit: BottomExitPolicy,
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The active rule terminated and the cursor moved on.
    pub rule_advanced: bool,
    /// The creep fell past the floor and was sent back to its spawn point.
    pub recycled: bool,
}

/// Move `creep` one step along its active rule and cycle the rule if it terminated.
///
/// A creep without rules does not move.
pub fn step(creep: &mut Creep, bounds: &PatrolBounds, config: &PatrolConfig) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    let Some(rule) = creep.active_rule().copied() else {
        return outcome;
    };

    creep.bounds.origin += rule.delta;
    creep.distance_since_rule_start += rule.step_length();

    let terminated = match rule.termination {
        Termination::WallBound => bounds.blocks(&rule, creep.position()),
        Termination::DistanceLimit => config
            .comparison
            .reached(creep.distance_since_rule_start, rule.distance_threshold),
    };

    if terminated {
        creep.current_rule = (creep.current_rule + 1) % creep.rules.len();
        creep.distance_since_rule_start = 0;
        outcome.rule_advanced = true;
        trace!(rule = creep.current_rule, "creep advanced to next rule");
    }

    if config.bottom_exit == BottomExitPolicy::Recycle && bounds.below_floor(creep.position()) {
        creep.reset_movement();
        outcome.recycled = true;
    }

    outcome
}
