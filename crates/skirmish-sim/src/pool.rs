//! Fixed-capacity projectile pools.
//!
//! A pool never grows and never refuses a shot: `spawn` moves a wrapping
//! cursor forward and overwrites whatever sits in that slot, live or not.

use skirmish_core::components::Bullet;
use skirmish_core::types::{Point, Rect, Vector};

/// Arena of bullet slots with a wrapping spawn cursor.
#[derive(Debug, Clone)]
pub struct BulletPool {
    slots: Vec<Bullet>,
    cursor: usize,
}

impl BulletPool {
    /// A pool with `capacity` inactive slots. Capacity is at least one.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Bullet::default(); capacity.max(1)],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Fire an unowned (player) shot. Returns the slot written.
    pub fn spawn(&mut self, origin: Point, velocity: Vector) -> usize {
        self.write(Bullet {
            active: true,
            position: origin,
            velocity,
            owner: None,
        })
    }

    /// Fire a shot on behalf of the creep at roster index `owner`.
    pub fn spawn_owned(&mut self, origin: Point, velocity: Vector, owner: usize) -> usize {
        self.write(Bullet {
            active: true,
            position: origin,
            velocity,
            owner: Some(owner),
        })
    }

    fn write(&mut self, bullet: Bullet) -> usize {
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.slots[self.cursor] = bullet;
        self.cursor
    }

    /// Move every live bullet by its velocity; bullets that end up outside
    /// `bounds` are retired.
    pub fn advance_all(&mut self, bounds: Rect) {
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.position += bullet.velocity;
            if !bounds.contains(bullet.position) {
                bullet.active = false;
            }
        }
    }

    /// Retire the bullet in `slot`. Out-of-range slots are ignored.
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(bullet) = self.slots.get_mut(slot) {
            bullet.active = false;
        }
    }

    pub fn clear(&mut self) {
        for bullet in &mut self.slots {
            bullet.active = false;
        }
    }

    /// Live bullets with their slot index, in slot order.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Bullet)> {
        self.slots.iter().enumerate().filter(|(_, b)| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    pub fn active_positions(&self) -> Vec<Point> {
        self.active().map(|(_, b)| b.position).collect()
    }

    /// True while a shot fired by creep `owner` is still in flight.
    pub fn has_live_shot(&self, owner: usize) -> bool {
        self.active().any(|(_, b)| b.owner == Some(owner))
    }

    /// Read-only view of a single slot.
    pub fn get(&self, slot: usize) -> Option<&Bullet> {
        self.slots.get(slot)
    }
}
