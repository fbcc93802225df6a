//! Data-contract checks the simulation relies on.

use skirmish_core::components::LevelDef;

use crate::error::LevelError;

/// Reject level sets the simulation cannot play: no levels, a level without
/// creeps (it could never be cleared), a creep without rules, or a creep
/// that starts dead.
pub fn validate(levels: &[LevelDef]) -> Result<(), LevelError> {
    if levels.is_empty() {
        return Err(LevelError::EmptyLevelSet);
    }

    for (level_index, level) in levels.iter().enumerate() {
        if level.creeps.is_empty() {
            return Err(LevelError::EmptyLevel { level: level_index });
        }
        for (creep_index, creep) in level.creeps.iter().enumerate() {
            if creep.rules.is_empty() {
                return Err(LevelError::EmptyRuleList {
                    level: level_index,
                    creep: creep_index,
                });
            }
            if creep.full_health <= 0 {
                return Err(LevelError::NonPositiveHealth {
                    level: level_index,
                    creep: creep_index,
                    health: creep.full_health,
                });
            }
        }
    }

    Ok(())
}
