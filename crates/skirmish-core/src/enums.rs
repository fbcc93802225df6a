//! Enumeration types used throughout the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TILT_DEAD_ZONE;

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Title/tip screen; any input skips it.
    #[default]
    Intro,
    /// "Get ready" countdown before a level starts.
    Countdown,
    /// Level in progress.
    Active,
    /// Between-level upgrade shop.
    Shop,
    /// Ship destroyed; waits for confirm.
    GameOver,
}

/// Player gun configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GunKind {
    /// One shot straight up.
    #[default]
    Single,
    /// Two angled shots.
    Double,
    /// Straight shot plus both angled shots.
    Triple,
}

/// Condition that ends a movement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Ends when the creep reaches a wall on an axis the rule moves along.
    WallBound,
    /// Ends once the distance travelled under the rule meets its threshold.
    DistanceLimit,
}

impl Termination {
    /// Decode the wire code used by the compact level format.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::WallBound),
            1 => Some(Self::DistanceLimit),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::WallBound => 0,
            Self::DistanceLimit => 1,
        }
    }
}

/// Creep archetype; selects the sprite and therefore the hit box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreepKind {
    #[default]
    Drone,
    Fighter,
    Bomber,
    Mothership,
}

impl CreepKind {
    pub const ALL: [CreepKind; 4] = [
        CreepKind::Drone,
        CreepKind::Fighter,
        CreepKind::Bomber,
        CreepKind::Mothership,
    ];

    /// Sprite (and hit box) size in pixels.
    pub fn size(self) -> IVec2 {
        match self {
            Self::Drone => IVec2::new(10, 8),
            Self::Fighter => IVec2::new(12, 8),
            Self::Bomber => IVec2::new(14, 10),
            Self::Mothership => IVec2::new(16, 12),
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Shop catalog entries, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    #[default]
    ExtraArmor,
    PowerUp,
    DoubleGun,
    TripleGun,
    Done,
}

impl ShopItem {
    pub const CATALOG: [ShopItem; 5] = [
        ShopItem::ExtraArmor,
        ShopItem::PowerUp,
        ShopItem::DoubleGun,
        ShopItem::TripleGun,
        ShopItem::Done,
    ];

    /// Price of the item; `Done` is not for sale.
    pub fn cost(self) -> Option<u32> {
        match self {
            Self::ExtraArmor => Some(100),
            Self::PowerUp => Some(200),
            Self::DoubleGun => Some(300),
            Self::TripleGun => Some(500),
            Self::Done => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Next entry down the list, wrapping to the top.
    pub fn next(self) -> Self {
        Self::CATALOG[(self.index() + 1) % Self::CATALOG.len()]
    }

    /// Next entry up the list, wrapping to the bottom.
    pub fn prev(self) -> Self {
        let len = Self::CATALOG.len();
        Self::CATALOG[(self.index() + len - 1) % len]
    }
}

/// Thresholded horizontal steering signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steering {
    Left,
    #[default]
    Idle,
    Right,
}

impl Steering {
    /// Threshold a raw tilt sample; magnitudes at or below the dead zone read as idle.
    pub fn from_tilt(x: i32) -> Self {
        if x.abs() <= TILT_DEAD_ZONE {
            Self::Idle
        } else if x < 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Map a signed axis value onto {-1, 0, +1}.
    pub fn from_axis(value: i32) -> Self {
        match value.signum() {
            -1 => Self::Left,
            1 => Self::Right,
            _ => Self::Idle,
        }
    }

    pub fn direction(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Idle => 0,
            Self::Right => 1,
        }
    }
}

/// How `Termination::DistanceLimit` compares the travelled distance to the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceComparison {
    /// Rule ends once travelled >= threshold.
    #[default]
    Inclusive,
    /// Rule ends once travelled > threshold (one extra step per leg).
    Strict,
}

impl DistanceComparison {
    pub fn reached(self, travelled: i32, threshold: i32) -> bool {
        match self {
            Self::Inclusive => travelled >= threshold,
            Self::Strict => travelled > threshold,
        }
    }
}

/// What happens to a creep that descends past the bottom of the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BottomExitPolicy {
    /// Return to the initial position and restart at rule 0.
    #[default]
    Recycle,
    /// Keep going; the creep stays alive off-field.
    Exit,
}

/// Coarse health level used by renderers to draw damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    Healthy,
    /// One more hit is fatal.
    Weak,
}
