//! Level loading errors.

use thiserror::Error;

/// Everything that can be wrong with a level set.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level data truncated at byte {offset}: expected {expected}")]
    Truncated { offset: usize, expected: &'static str },

    #[error("level set contains no levels")]
    EmptyLevelSet,

    #[error("level {level} has no creeps")]
    EmptyLevel { level: usize },

    #[error("creep {creep} of level {level} has no movement rules")]
    EmptyRuleList { level: usize, creep: usize },

    #[error("creep {creep} of level {level} has non-positive health {health}")]
    NonPositiveHealth {
        level: usize,
        creep: usize,
        health: i32,
    },

    #[error("creep {creep} of level {level} has unknown kind code {code}")]
    UnknownCreepKind { level: usize, creep: usize, code: u8 },

    #[error("rule {rule} of creep {creep} in level {level} has unknown termination code {code}")]
    UnknownTermination {
        level: usize,
        creep: usize,
        rule: usize,
        code: u8,
    },

    #[error("{field} value {value} does not fit the compact format")]
    ValueOutOfRange { field: &'static str, value: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
