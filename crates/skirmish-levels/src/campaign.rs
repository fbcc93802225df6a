//! Built-in campaign used when no level file is supplied.
//!
//! Coordinates assume the default 144x168 play field: horizontal walls at
//! x = 22 and x = 122, vertical patrol band between y = 20 and y = 50.

use skirmish_core::components::{CreepDef, LevelDef, MovementRule};
use skirmish_core::enums::CreepKind;
use skirmish_core::types::Point;

fn creep(x: i32, y: i32, kind: CreepKind, full_health: i32, rules: Vec<MovementRule>) -> CreepDef {
    CreepDef {
        initial_position: Point::new(x, y),
        kind,
        full_health,
        rules,
    }
}

/// Sideways sweep, step down, sweep back, step up. Distance based, so a
/// whole row keeps its formation. `direction` picks the first sweep's side.
fn formation_sweep(direction: i32, width: i32, drop: i32) -> Vec<MovementRule> {
    vec![
        MovementRule::distance_limit(direction, 0, width),
        MovementRule::distance_limit(0, 1, drop),
        MovementRule::distance_limit(-direction, 0, width),
        MovementRule::distance_limit(0, -1, drop),
    ]
}

/// Wall-to-wall patrol inside the vertical band.
fn wall_patrol(speed: i32) -> Vec<MovementRule> {
    vec![
        MovementRule::wall_bound(speed, 0),
        MovementRule::wall_bound(0, 1),
        MovementRule::wall_bound(-speed, 0),
        MovementRule::wall_bound(0, -1),
    ]
}

/// Straight dive that leaves the field and recycles from the top.
fn dive(speed: i32) -> Vec<MovementRule> {
    vec![MovementRule::distance_limit(0, speed, 255)]
}

pub fn default_campaign() -> Vec<LevelDef> {
    vec![
        // 1: a single row of drones.
        LevelDef {
            creeps: (0..4)
                .map(|i| creep(26 + i * 20, 24, CreepKind::Drone, 1, formation_sweep(1, 30, 4)))
                .collect(),
        },
        // 2: two rows, the back row tougher.
        LevelDef {
            creeps: (0..4)
                .map(|i| creep(26 + i * 20, 22, CreepKind::Fighter, 2, formation_sweep(1, 30, 6)))
                .chain(
                    (0..4).map(|i| creep(26 + i * 20, 34, CreepKind::Drone, 1, formation_sweep(1, 30, 6))),
                )
                .collect(),
        },
        // 3: bombers patrolling wall to wall, drones diving.
        LevelDef {
            creeps: vec![
                creep(40, 24, CreepKind::Bomber, 3, wall_patrol(1)),
                creep(90, 36, CreepKind::Bomber, 3, wall_patrol(1)),
                creep(30, 0, CreepKind::Drone, 1, dive(1)),
                creep(70, 0, CreepKind::Drone, 1, dive(2)),
                creep(110, 0, CreepKind::Drone, 1, dive(1)),
            ],
        },
        // 4: mothership with an escort.
        LevelDef {
            creeps: vec![
                creep(64, 22, CreepKind::Mothership, 6, wall_patrol(1)),
                creep(30, 40, CreepKind::Fighter, 2, formation_sweep(1, 40, 4)),
                creep(100, 40, CreepKind::Fighter, 2, formation_sweep(-1, 40, 4)),
            ],
        },
    ]
}
