//! Compact rule stream decoder and encoder.
//!
//! Layout, one byte per field:
//!
//! ```text
//! level_count
//!   creep_count                                  (per level)
//!     x y full_health kind rule_count            (per creep)
//!       dx dy termination distance               (per rule)
//! ```
//!
//! `dx`/`dy` are wide-signed: bytes above 128 encode `b - 256`, so the
//! representable range is -127..=128. Every other field is unsigned.

use skirmish_core::components::{CreepDef, LevelDef, MovementRule};
use skirmish_core::enums::{CreepKind, Termination};
use skirmish_core::types::{Point, Vector};

use crate::error::LevelError;
use crate::validate::validate;

/// Smallest delta component the stream can carry.
const DELTA_MIN: i32 = -127;

/// Largest delta component the stream can carry.
const DELTA_MAX: i32 = 128;

struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn byte(&mut self, expected: &'static str) -> Result<u8, LevelError> {
        let value = *self.data.get(self.offset).ok_or(LevelError::Truncated {
            offset: self.offset,
            expected,
        })?;
        self.offset += 1;
        Ok(value)
    }

    fn delta(&mut self, expected: &'static str) -> Result<i32, LevelError> {
        let value = self.byte(expected)? as i32;
        Ok(if value > 128 { value - 256 } else { value })
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

/// Decode and validate a rule stream.
pub fn decode_stream(data: &[u8]) -> Result<Vec<LevelDef>, LevelError> {
    let mut reader = ByteReader::new(data);
    let level_count = reader.byte("level count")? as usize;
    let mut levels = Vec::with_capacity(level_count);

    for level in 0..level_count {
        let creep_count = reader.byte("creep count")? as usize;
        let mut creeps = Vec::with_capacity(creep_count);

        for creep in 0..creep_count {
            let x = reader.byte("creep x")? as i32;
            let y = reader.byte("creep y")? as i32;
            let full_health = reader.byte("creep health")? as i32;
            let kind_code = reader.byte("creep kind")?;
            let kind = CreepKind::from_code(kind_code).ok_or(LevelError::UnknownCreepKind {
                level,
                creep,
                code: kind_code,
            })?;
            let rule_count = reader.byte("rule count")? as usize;

            let mut rules = Vec::with_capacity(rule_count);
            for rule in 0..rule_count {
                let dx = reader.delta("rule dx")?;
                let dy = reader.delta("rule dy")?;
                let code = reader.byte("rule termination")?;
                let termination =
                    Termination::from_code(code).ok_or(LevelError::UnknownTermination {
                        level,
                        creep,
                        rule,
                        code,
                    })?;
                let distance_threshold = reader.byte("rule distance")? as i32;
                rules.push(MovementRule {
                    delta: Vector::new(dx, dy),
                    termination,
                    distance_threshold,
                });
            }

            creeps.push(CreepDef {
                initial_position: Point::new(x, y),
                kind,
                full_health,
                rules,
            });
        }

        levels.push(LevelDef { creeps });
    }

    if reader.remaining() > 0 {
        tracing::warn!(
            trailing = reader.remaining(),
            "ignoring trailing bytes after level data"
        );
    }

    validate(&levels)?;
    Ok(levels)
}

fn unsigned(field: &'static str, value: i32) -> Result<u8, LevelError> {
    u8::try_from(value).map_err(|_| LevelError::ValueOutOfRange {
        field,
        value: value as i64,
    })
}

fn count(field: &'static str, value: usize) -> Result<u8, LevelError> {
    u8::try_from(value).map_err(|_| LevelError::ValueOutOfRange {
        field,
        value: value as i64,
    })
}

fn delta(field: &'static str, value: i32) -> Result<u8, LevelError> {
    if !(DELTA_MIN..=DELTA_MAX).contains(&value) {
        return Err(LevelError::ValueOutOfRange {
            field,
            value: value as i64,
        });
    }
    Ok(value.rem_euclid(256) as u8)
}

/// Encode levels into the compact stream. Fails on values the format cannot hold.
pub fn encode_stream(levels: &[LevelDef]) -> Result<Vec<u8>, LevelError> {
    let mut out = vec![count("level count", levels.len())?];

    for level in levels {
        out.push(count("creep count", level.creeps.len())?);
        for creep in &level.creeps {
            out.push(unsigned("creep x", creep.initial_position.x)?);
            out.push(unsigned("creep y", creep.initial_position.y)?);
            out.push(unsigned("creep health", creep.full_health)?);
            out.push(creep.kind.code());
            out.push(count("rule count", creep.rules.len())?);
            for rule in &creep.rules {
                out.push(delta("rule dx", rule.delta.x)?);
                out.push(delta("rule dy", rule.delta.y)?);
                out.push(rule.termination.code());
                out.push(unsigned("rule distance", rule.distance_threshold)?);
            }
        }
    }

    Ok(out)
}
