//! JSON level sets.

use serde::{Deserialize, Serialize};

use skirmish_core::components::LevelDef;

use crate::error::LevelError;
use crate::validate::validate;

/// Top-level JSON document: `{ "levels": [ { "creeps": [...] }, ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelDef>,
}

/// Parse and validate a JSON level set.
pub fn parse_json(text: &str) -> Result<Vec<LevelDef>, LevelError> {
    let set: LevelSet = serde_json::from_str(text)?;
    validate(&set.levels)?;
    Ok(set.levels)
}

/// Pretty-printed JSON for a level set.
pub fn to_json(levels: &[LevelDef]) -> Result<String, LevelError> {
    let set = LevelSet {
        levels: levels.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&set)?)
}
