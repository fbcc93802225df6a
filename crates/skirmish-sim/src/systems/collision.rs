//! Collision system: point-in-rectangle tests between bullets and hulls.
//!
//! Owns no entities. Ties resolve by iteration order: creeps in roster
//! order, bullets in slot order, first match wins.

use tracing::debug;

use skirmish_core::components::{Creep, Player};
use skirmish_core::events::GameEvent;
use skirmish_core::types::Rect;

use crate::pool::BulletPool;

/// Apply player shots to alive creeps. Each creep takes at most one hit per
/// tick. Returns the roster indices of the creeps killed, in roster order.
pub fn resolve_creep_hits(
    creeps: &mut [Creep],
    player_bullets: &mut BulletPool,
    gun_power: i32,
) -> Vec<usize> {
    let mut kills = Vec::new();

    for (index, creep) in creeps.iter_mut().enumerate() {
        if !creep.is_alive() {
            continue;
        }

        let hit = player_bullets
            .active()
            .find(|(_, bullet)| creep.bounds.contains(bullet.position))
            .map(|(slot, _)| slot);

        let Some(slot) = hit else {
            continue;
        };

        player_bullets.deactivate(slot);
        creep.health -= gun_power;
        if !creep.is_alive() {
            debug!(creep = index, "creep destroyed");
            kills.push(index);
        }
    }

    kills
}

/// Apply enemy shots to the ship, one armor per shot. Stops at the hit that
/// takes armor to -1. Returns the number of hits taken.
pub fn resolve_player_hits(
    enemy_bullets: &mut BulletPool,
    ship: &Rect,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
) -> usize {
    let hits: Vec<usize> = enemy_bullets
        .active()
        .filter(|(_, bullet)| ship.contains(bullet.position))
        .map(|(slot, _)| slot)
        .collect();

    let mut taken = 0;
    for slot in hits {
        enemy_bullets.deactivate(slot);
        player.armor -= 1;
        taken += 1;
        events.push(GameEvent::ShipHit {
            armor: player.armor,
        });
        if player.is_destroyed() {
            break;
        }
    }

    taken
}
