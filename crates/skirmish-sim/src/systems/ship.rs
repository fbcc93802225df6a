//! Player ship steering.

use skirmish_core::constants::SHIP_MOVEMENT_SPEED;
use skirmish_core::enums::Steering;
use skirmish_core::types::{PlayField, Rect};

/// Slide the ship horizontally, clamped between the left padding and the right wall.
pub fn steer(ship: &mut Rect, steering: Steering, field: &PlayField) {
    let x = ship.origin.x + steering.direction() * SHIP_MOVEMENT_SPEED;
    ship.origin.x = x.min(field.right_wall()).max(field.padding);
}
