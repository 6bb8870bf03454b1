//! Axis-aligned rectangles
//!
//! Used for the board, the player's hurtbox and rectangular bullets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// An axis-aligned box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left corner
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Inclusive point test
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Do the two boxes overlap at all? Touching edges count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Does this box overlap the circle at `center` with `radius`?
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        // Closest point of the box to the circle center. A box with negative
        // size collapses onto its origin instead of panicking.
        let closest = Vec2::new(
            clamp(center.x, self.left(), self.right()),
            clamp(center.y, self.top(), self.bottom()),
        );
        center.distance_squared(closest) <= radius * radius
    }
}
