//! Bullets: circular and rectangular hazards owned by a spawner

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Handle of the spawner that emitted a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnerId(pub u32);

/// Data shared by every bullet shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonBulletData {
    /// Raw damage before the player's defense is applied
    pub attack: u32,
}

impl CommonBulletData {
    pub fn new(attack: u32) -> Self {
        Self { attack }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BulletShape {
    Circular { pos: Vec2, radius: f32 },
    Rectangular { shape: Rect },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub shape: BulletShape,
    pub common: CommonBulletData,
    pub creator: SpawnerId,
}

impl Bullet {
    pub fn circular(pos: Vec2, radius: f32, common: CommonBulletData, creator: SpawnerId) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            shape: BulletShape::Circular { pos, radius },
            common,
            creator,
        }
    }

    pub fn rectangular(shape: Rect, common: CommonBulletData, creator: SpawnerId) -> Self {
        Self {
            shape: BulletShape::Rectangular { shape },
            common,
            creator,
        }
    }

    #[inline]
    pub fn attack(&self) -> u32 {
        self.common.attack
    }

    /// Does this bullet overlap `rect`?
    pub fn intersects(&self, rect: &Rect) -> bool {
        match self.shape {
            BulletShape::Circular { pos, radius } => rect.intersects_circle(pos, radius),
            BulletShape::Rectangular { shape } => rect.intersects(&shape),
        }
    }

    /// Move the bullet by `offset`
    pub fn translate(&mut self, offset: Vec2) {
        match &mut self.shape {
            BulletShape::Circular { pos, .. } => *pos += offset,
            BulletShape::Rectangular { shape } => shape.translate(offset),
        }
    }

    /// Reference point used for culling: circle center or rect top-left
    pub fn anchor(&self) -> Vec2 {
        match self.shape {
            BulletShape::Circular { pos, .. } => pos,
            BulletShape::Rectangular { shape } => shape.origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: SpawnerId = SpawnerId(1);

    #[test]
    fn test_circular_bullet_intersects_box() {
        let hurtbox = Rect::new(705.0, 755.0, 30.0, 20.0);
        let hit = Bullet::circular(Vec2::new(720.0, 745.0), 10.0, CommonBulletData::new(2), OWNER);
        assert!(hit.intersects(&hurtbox));
        let miss = Bullet::circular(Vec2::new(720.0, 740.0), 10.0, CommonBulletData::new(2), OWNER);
        assert!(!miss.intersects(&hurtbox));
    }

    #[test]
    fn test_rectangular_bullet_intersects_box() {
        let hurtbox = Rect::new(0.0, 0.0, 30.0, 20.0);
        let b = Bullet::rectangular(Rect::new(30.0, 20.0, 40.0, 70.0), CommonBulletData::new(4), OWNER);
        assert!(b.intersects(&hurtbox));
    }

    #[test]
    fn test_translate_moves_anchor() {
        let mut c = Bullet::circular(Vec2::new(415.0, 540.0), 10.0, CommonBulletData::new(2), OWNER);
        c.translate(Vec2::new(0.0, 4.0));
        assert_eq!(c.anchor(), Vec2::new(415.0, 544.0));

        let mut r = Bullet::rectangular(Rect::new(1440.0, 520.0, 40.0, 70.0), CommonBulletData::new(4), OWNER);
        r.translate(Vec2::new(-10.0, 0.0));
        assert_eq!(r.anchor(), Vec2::new(1430.0, 520.0));
        assert_eq!(r.attack(), 4);
    }
}
