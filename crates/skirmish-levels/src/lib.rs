//! Level data for SKIRMISH.
//!
//! Loading, validation, and encoding of creep rosters: the compact
//! rule byte stream, JSON level sets, and the built-in campaign.

pub use skirmish_core as core;

pub mod campaign;
pub mod error;
pub mod json;
pub mod stream;
pub mod validate;

use std::path::Path;

use skirmish_core::components::LevelDef;

pub use campaign::default_campaign;
pub use error::LevelError;
pub use json::{parse_json, to_json, LevelSet};
pub use stream::{decode_stream, encode_stream};
pub use validate::validate;

/// Load and validate a level set. `.json` files are parsed as JSON,
/// anything else as the compact rule stream.
pub fn load_file(path: &Path) -> Result<Vec<LevelDef>, LevelError> {
    let levels = if is_json_path(path) {
        let text = std::fs::read_to_string(path)?;
        parse_json(&text)?
    } else {
        let data = std::fs::read(path)?;
        decode_stream(&data)?
    };

    tracing::info!(path = %path.display(), levels = levels.len(), "loaded level set");
    Ok(levels)
}

/// Write a level set, choosing the format from the extension the same way
/// `load_file` does.
pub fn save_file(path: &Path, levels: &[LevelDef]) -> Result<(), LevelError> {
    validate(levels)?;
    if is_json_path(path) {
        std::fs::write(path, to_json(levels)?)?;
    } else {
        std::fs::write(path, encode_stream(levels)?)?;
    }
    tracing::info!(path = %path.display(), levels = levels.len(), "saved level set");
    Ok(())
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
