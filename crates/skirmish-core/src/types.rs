//! Fundamental geometric and simulation types.
//!
//! All coordinates are integer pixels with the origin at the top-left
//! corner of the play field; y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A position on the play field.
pub type Point = IVec2;

/// A per-tick displacement.
pub type Vector = IVec2;

/// Axis-aligned rectangle: `origin` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.x
            && point.y < self.origin.y + self.size.y
    }

    /// Horizontal center.
    pub fn center_x(&self) -> i32 {
        self.origin.x + self.size.x / 2
    }

    /// First row below the rectangle.
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }
}

/// Play field geometry and the walls derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    pub ship_size: IVec2,
    pub top_wall: i32,
    pub bottom_wall: i32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            padding: FIELD_PADDING,
            ship_size: SHIP_SIZE,
            top_wall: TOP_WALL,
            bottom_wall: BOTTOM_WALL,
        }
    }
}

impl PlayField {
    /// The whole field; bullets leaving it are retired.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Left limit of horizontal creep patrols.
    pub fn left_wall(&self) -> i32 {
        self.padding + self.ship_size.x
    }

    /// Right limit of horizontal creep patrols and of ship travel.
    pub fn right_wall(&self) -> i32 {
        self.width - self.padding - self.ship_size.x
    }

    /// Row the ship sits on.
    pub fn ship_row(&self) -> i32 {
        self.height - self.ship_size.y - self.padding
    }

    /// Ship rectangle at its starting, horizontally centered, position.
    pub fn ship_start(&self) -> Rect {
        Rect::new(
            self.width / 2 - self.ship_size.x / 2,
            self.ship_row(),
            self.ship_size.x,
            self.ship_size.y,
        )
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Ticks since the engine was created, paused or not.
    pub tick: u64,
    /// Ticks that actually advanced an active level.
    pub active_ticks: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed wall time in milliseconds at the nominal tick rate.
    pub fn elapsed_ms(&self) -> u64 {
        self.tick * TICK_MS
    }
}
