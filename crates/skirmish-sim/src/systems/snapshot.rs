//! Snapshot system: reads the engine and builds a complete `GameSnapshot`.
//!
//! Read-only; never modifies the session.

use skirmish_core::enums::{GameState, ShopItem};
use skirmish_core::events::GameEvent;
use skirmish_core::state::*;

use crate::economy;
use crate::engine::SimulationEngine;

/// Build the snapshot for the tick that just ran.
pub fn build_snapshot(engine: &SimulationEngine, events: Vec<GameEvent>) -> GameSnapshot {
    let wave = engine.wave();
    let countdown = if engine.state() == GameState::Countdown {
        engine.countdown().ready_count
    } else {
        0
    };

    GameSnapshot {
        time: engine.time(),
        state: engine.state(),
        paused: engine.is_paused(),
        level: wave.current_level + 1,
        currency: engine.player().currency,
        kill_reward: wave.kill_reward,
        health_multiplier: wave.health_multiplier,
        countdown,
        creeps_remaining: wave.creeps_remaining,
        ship: build_ship(engine),
        player_bullets: engine.player_bullets().active_positions(),
        enemy_bullets: engine.enemy_bullets().active_positions(),
        creeps: build_creeps(engine),
        shop: build_shop(engine),
        events,
    }
}

fn build_ship(engine: &SimulationEngine) -> ShipView {
    let player = engine.player();
    ShipView {
        bounds: engine.ship(),
        armor: player.armor,
        full_armor: player.full_armor,
        armor_ratio: player.armor_ratio(),
        weak: player.is_weak(),
        gun_kind: player.gun_kind,
        gun_power: player.gun_power,
    }
}

/// Alive creeps only, in roster order.
fn build_creeps(engine: &SimulationEngine) -> Vec<CreepView> {
    engine
        .creeps()
        .iter()
        .enumerate()
        .filter(|(_, creep)| creep.is_alive())
        .map(|(index, creep)| CreepView {
            index,
            bounds: creep.bounds,
            kind: creep.kind,
            health: creep.health,
            tier: creep.health_tier(),
        })
        .collect()
}

fn build_shop(engine: &SimulationEngine) -> ShopView {
    let player = engine.player();
    ShopView {
        selection: engine.shop_selection(),
        entries: ShopItem::CATALOG
            .iter()
            .map(|&item| ShopEntryView {
                item,
                cost: item.cost(),
                affordable: economy::can_afford(player, item),
            })
            .collect(),
    }
}
