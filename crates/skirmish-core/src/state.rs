//! Game state snapshot: everything a renderer needs, emitted after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Point, Rect, SimTime};

/// Complete visible state broadcast after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub state: GameState,
    pub paused: bool,
    /// 1-based level number for display.
    pub level: u32,
    pub currency: u32,
    /// Currency per kill on the current level.
    pub kill_reward: u32,
    pub health_multiplier: i32,
    /// Ready count while in `Countdown`.
    pub countdown: u32,
    pub creeps_remaining: usize,
    pub ship: ShipView,
    pub player_bullets: Vec<Point>,
    pub enemy_bullets: Vec<Point>,
    pub creeps: Vec<CreepView>,
    pub shop: ShopView,
    pub events: Vec<GameEvent>,
}

/// Player ship as drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub bounds: Rect,
    pub armor: i32,
    pub full_armor: i32,
    /// 0.0..=1.0 for the armor bar.
    pub armor_ratio: f32,
    pub weak: bool,
    pub gun_kind: GunKind,
    pub gun_power: i32,
}

/// An alive creep as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreepView {
    /// Roster index within the level.
    pub index: usize,
    pub bounds: Rect,
    pub kind: CreepKind,
    pub health: i32,
    pub tier: HealthTier,
}

/// Shop screen contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopView {
    pub selection: ShopItem,
    pub entries: Vec<ShopEntryView>,
}

/// One catalog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntryView {
    pub item: ShopItem,
    pub cost: Option<u32>,
    pub affordable: bool,
}
