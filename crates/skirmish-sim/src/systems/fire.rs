//! Fire system: enemy shot decisions and player auto-fire.

use glam::IVec2;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::Creep;
use skirmish_core::constants::*;
use skirmish_core::enums::GunKind;
use skirmish_core::types::{Point, Rect};

use crate::config::SimConfig;
use crate::pool::BulletPool;
use crate::wave::creep_should_fire;

/// Let every eligible creep roll for a shot, in roster order. Shots leave
/// the bottom-center of the creep heading straight down.
pub fn enemy_fire(
    creeps: &[Creep],
    enemy_bullets: &mut BulletPool,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
) {
    for (index, creep) in creeps.iter().enumerate() {
        if creep_should_fire(creep, index, enemy_bullets, rng, config) {
            enemy_bullets.spawn_owned(creep.muzzle(), CREEP_SHOT_VELOCITY, index);
        }
    }
}

/// Gun cooldown between player volleys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gun {
    pub cooldown: u32,
}

impl Gun {
    /// Tick the gun. Fires when the cooldown has run out and rearms it, so a
    /// volley leaves every `SHIP_FIRE_TIME_LAG + 1` ticks.
    pub fn ready(&mut self) -> bool {
        if self.cooldown == 0 {
            self.cooldown = SHIP_FIRE_TIME_LAG;
            true
        } else {
            self.cooldown -= 1;
            false
        }
    }
}

/// Fire one volley of `kind` from the top-center of the ship.
pub fn player_volley(ship: &Rect, kind: GunKind, player_bullets: &mut BulletPool) {
    let muzzle = Point::new(ship.center_x(), ship.origin.y);
    let spread = IVec2::new(DOUBLE_GUN_SPREAD, 0);

    if matches!(kind, GunKind::Single | GunKind::Triple) {
        player_bullets.spawn(muzzle, PLAYER_SHOT_VELOCITY);
    }
    if matches!(kind, GunKind::Double | GunKind::Triple) {
        player_bullets.spawn(muzzle - spread, PLAYER_SHOT_VELOCITY - IVec2::X);
        player_bullets.spawn(muzzle + spread, PLAYER_SHOT_VELOCITY + IVec2::X);
    }
}

/// Auto-fire: tick the gun and fire a volley when it is ready.
pub fn player_fire(gun: &mut Gun, ship: &Rect, kind: GunKind, player_bullets: &mut BulletPool) {
    if gun.ready() {
        player_volley(ship, kind, player_bullets);
    }
}
