//! Events emitted by the simulation for audio, haptic, and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete side effects produced during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Purchase rejected for lack of currency (buzz the player).
    PurchaseDenied {
        item: ShopItem,
        cost: u32,
        currency: u32,
    },
    /// Upgrade bought.
    UpgradePurchased { item: ShopItem, cost: u32 },
    /// Creep destroyed by a player shot.
    CreepKilled { creep: usize, reward: u32 },
    /// Enemy shot struck the ship.
    ShipHit { armor: i32 },
    /// Every creep of the level is dead; `level` is the new 0-based index.
    LevelCleared { level: u32 },
    /// Armor ran out.
    ShipDestroyed { level: u32 },
    /// Pause toggled during an active level.
    PauseToggled { paused: bool },
    /// Top-level state changed.
    StateChanged { from: GameState, to: GameState },
}
