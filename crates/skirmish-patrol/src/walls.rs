//! Patrol limits derived from the play field.

use skirmish_core::components::MovementRule;
use skirmish_core::types::{PlayField, Point};

/// Walls that end `WallBound` rules, plus the floor used by the exit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatrolBounds {
    pub left_wall: i32,
    pub right_wall: i32,
    pub top_wall: i32,
    pub bottom_wall: i32,
    /// Creeps whose origin goes below this row have left the field.
    pub floor: i32,
}

impl PatrolBounds {
    pub fn from_field(field: &PlayField) -> Self {
        Self {
            left_wall: field.left_wall(),
            right_wall: field.right_wall(),
            top_wall: field.top_wall,
            bottom_wall: field.bottom_wall,
            floor: field.height,
        }
    }

    /// True when `position` is at or past a wall on an axis `rule` moves along.
    ///
    /// A purely horizontal rule ignores the vertical walls and vice versa, so
    /// a creep parked below `bottom_wall` can still patrol sideways.
    pub fn blocks(&self, rule: &MovementRule, position: Point) -> bool {
        let horizontal = rule.delta.x != 0
            && (position.x <= self.left_wall || position.x >= self.right_wall);
        let vertical = rule.delta.y != 0
            && (position.y <= self.top_wall || position.y >= self.bottom_wall);
        horizontal || vertical
    }

    pub fn below_floor(&self, position: Point) -> bool {
        position.y > self.floor
    }
}

impl Default for PatrolBounds {
    fn default() -> Self {
        Self::from_field(&PlayField::default())
    }
}
