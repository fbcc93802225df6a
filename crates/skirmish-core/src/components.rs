//! Entity data: bullets, creeps, levels, and the player.
//!
//! `CreepDef`/`LevelDef` are the immutable data contract with the level
//! loader. `Creep`/`Level` are their runtime counterparts, reset in place
//! at every level (re)start.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CreepKind, GunKind, HealthTier, Termination};
use crate::types::{Point, Rect, Vector};

/// A pooled projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub active: bool,
    pub position: Point,
    pub velocity: Vector,
    /// Roster index of the creep that fired it; `None` for player shots.
    pub owner: Option<usize>,
}

/// One leg of a creep patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRule {
    pub delta: Vector,
    pub termination: Termination,
    /// Only meaningful for `Termination::DistanceLimit`.
    #[serde(default)]
    pub distance_threshold: i32,
}

impl MovementRule {
    pub fn wall_bound(dx: i32, dy: i32) -> Self {
        Self {
            delta: Vector::new(dx, dy),
            termination: Termination::WallBound,
            distance_threshold: 0,
        }
    }

    pub fn distance_limit(dx: i32, dy: i32, threshold: i32) -> Self {
        Self {
            delta: Vector::new(dx, dy),
            termination: Termination::DistanceLimit,
            distance_threshold: threshold,
        }
    }

    /// Manhattan length of one step.
    pub fn step_length(&self) -> i32 {
        self.delta.x.abs() + self.delta.y.abs()
    }
}

/// Loader-facing creep definition. `rules` must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreepDef {
    pub initial_position: Point,
    #[serde(default)]
    pub kind: CreepKind,
    pub full_health: i32,
    pub rules: Vec<MovementRule>,
}

/// Loader-facing level definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    pub creeps: Vec<CreepDef>,
}

/// A creep as simulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creep {
    pub health: i32,
    pub full_health: i32,
    pub initial_position: Point,
    pub bounds: Rect,
    pub rules: Vec<MovementRule>,
    pub current_rule: usize,
    pub distance_since_rule_start: i32,
    pub kind: CreepKind,
}

impl Creep {
    pub fn from_def(def: &CreepDef) -> Self {
        let size = def.kind.size();
        Self {
            health: def.full_health,
            full_health: def.full_health,
            initial_position: def.initial_position,
            bounds: Rect::new(
                def.initial_position.x,
                def.initial_position.y,
                size.x,
                size.y,
            ),
            rules: def.rules.clone(),
            current_rule: 0,
            distance_since_rule_start: 0,
            kind: def.kind,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn position(&self) -> Point {
        self.bounds.origin
    }

    pub fn health_tier(&self) -> HealthTier {
        if self.health == 1 {
            HealthTier::Weak
        } else {
            HealthTier::Healthy
        }
    }

    /// The rule currently driving the creep.
    pub fn active_rule(&self) -> Option<&MovementRule> {
        self.rules.get(self.current_rule)
    }

    /// Back to the spawn point and the first rule.
    pub fn reset_movement(&mut self) {
        self.current_rule = 0;
        self.distance_since_rule_start = 0;
        self.bounds.origin = self.initial_position;
    }

    /// Full reset for a level (re)start.
    pub fn reset(&mut self, health_multiplier: i32) {
        self.health = self.full_health * health_multiplier;
        self.reset_movement();
    }

    /// Muzzle for creep shots: bottom-center of the sprite.
    pub fn muzzle(&self) -> Point {
        Point::new(self.bounds.center_x(), self.bounds.bottom())
    }
}

/// A level roster as simulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub creeps: Vec<Creep>,
}

impl Level {
    pub fn from_def(def: &LevelDef) -> Self {
        Self {
            creeps: def.creeps.iter().map(Creep::from_def).collect(),
        }
    }

    pub fn alive_count(&self) -> usize {
        self.creeps.iter().filter(|c| c.is_alive()).count()
    }
}

/// Player ship status and upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Ranges from -1 (destroyed) to `full_armor`.
    pub armor: i32,
    pub full_armor: i32,
    pub currency: u32,
    pub gun_kind: GunKind,
    pub gun_power: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            armor: INITIAL_SHIP_ARMOR,
            full_armor: INITIAL_SHIP_ARMOR,
            currency: INITIAL_MONEY,
            gun_kind: GunKind::default(),
            gun_power: INITIAL_GUN_POWER,
        }
    }
}

impl Player {
    /// Ship is one hit from destruction.
    pub fn is_weak(&self) -> bool {
        self.armor == 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.armor < 0
    }

    /// Fraction of armor left, for the armor bar. Zero once destroyed.
    pub fn armor_ratio(&self) -> f32 {
        if self.full_armor <= 0 {
            return 0.0;
        }
        self.armor.max(0) as f32 / self.full_armor as f32
    }
}
