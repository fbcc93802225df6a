//! Simulation constants and tuning parameters.

use glam::IVec2;

/// Milliseconds per simulation tick.
pub const TICK_MS: u64 = 30;

/// Ticks per in-game second (integer division, as the countdown counts it).
pub const STEPS_IN_SECOND: u32 = 1000 / TICK_MS as u32;

// --- Play field ---

/// Play field width in pixels.
pub const FIELD_WIDTH: i32 = 144;

/// Play field height in pixels.
pub const FIELD_HEIGHT: i32 = 168;

/// Margin between the field edge and the ship's travel limits.
pub const FIELD_PADDING: i32 = 8;

/// Upper bound for vertical creep patrols.
pub const TOP_WALL: i32 = 20;

/// Lower bound for vertical creep patrols.
pub const BOTTOM_WALL: i32 = 50;

// --- Ship ---

/// Ship sprite size in pixels.
pub const SHIP_SIZE: IVec2 = IVec2::new(14, 12);

/// Horizontal pixels per tick while steering.
pub const SHIP_MOVEMENT_SPEED: i32 = 2;

/// Raw tilt magnitude below which steering reads as idle.
pub const TILT_DEAD_ZONE: i32 = 16;

/// Ticks the gun waits after a volley.
pub const SHIP_FIRE_TIME_LAG: u32 = 10;

/// Horizontal offset of the angled shots of a double gun.
pub const DOUBLE_GUN_SPREAD: i32 = 2;

pub const INITIAL_SHIP_ARMOR: i32 = 4;
pub const INITIAL_MONEY: u32 = 100;
pub const INITIAL_GUN_POWER: i32 = 1;

// --- Bullets ---

/// Player bullet pool capacity.
pub const MAX_PLAYER_BULLETS: usize = 64;

/// Enemy bullet pool capacity.
pub const MAX_CREEP_BULLETS: usize = 64;

/// Velocity of a straight player shot.
pub const PLAYER_SHOT_VELOCITY: IVec2 = IVec2::new(0, -1);

/// Velocity of every creep shot.
pub const CREEP_SHOT_VELOCITY: IVec2 = IVec2::new(0, 1);

// --- Creeps & waves ---

/// Currency awarded per kill on the first level.
pub const CREEP_INITIAL_REWARD: u32 = 10;

/// Reward increase applied each time a level is cleared.
pub const CREEP_REWARD_STEP: u32 = 10;

/// Creep health multiplier before the level set has looped.
pub const INITIAL_HEALTH_MULTIPLIER: i32 = 1;

/// Per-tick chance (out of `CREEP_FIRE_ROLL_RANGE`) that an alive creep fires.
pub const CREEP_FIRE_CHANCE: u32 = 10;

/// Denominator of the creep fire roll.
pub const CREEP_FIRE_ROLL_RANGE: u32 = 1000;

// --- Countdown ---

/// Ready count shown when a countdown starts.
pub const INITIAL_READY_COUNT: u32 = 3;
