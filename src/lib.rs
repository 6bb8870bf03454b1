//! Bullet Board - a turn-based bullet-hell battle
//!
//! Core modules:
//! - `sim`: Per-tick simulation (board, bullets, collisions, turn phases, menus)
//! - `renderer`: Drawing capability and the per-frame draw pass
//! - `platform`: Keyboard input state
//! - `tuning`: Data-driven battle configuration
//! - `game`: Fixed-rate loop tying update and draw together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::GameLoop;
pub use tuning::Tuning;

use glam::Vec2;

use sim::Rect;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (4:3)
    pub const SCREEN_WIDTH: f32 = 1440.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Element id of the enemy sprite image
    pub const ENEMY_IMAGE_ID: &str = "enemy";
    /// Enemy sprites are drawn from this corner
    pub const ENEMY_SPRITE_X: f32 = 360.0;
    pub const ENEMY_SPRITE_Y: f32 = 0.0;

    /// Menu button box
    pub const BUTTON_X: f32 = 30.0;
    pub const BUTTON_WIDTH: f32 = 240.0;
    pub const BUTTON_HEIGHT: f32 = 100.0;
    /// Vertical distance between menu buttons
    pub const BUTTON_SPACING: f32 = 120.0;
    pub const BUTTON_FIRST_Y: f32 = 30.0;
}

/// Clamp `n` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: if `min > max` the result is `min`.
#[inline]
pub fn clamp(n: f32, min: f32, max: f32) -> f32 {
    if n <= min {
        min
    } else if n >= max {
        max
    } else {
        n
    }
}

/// Linearly interpolate between `start` and `end`. `t` is not clamped.
#[inline]
pub fn lerp(t: f32, start: f32, end: f32) -> f32 {
    (end - start) * t + start
}

/// Rotate `v` counter-clockwise by `angle` radians.
///
/// The zero vector stays zero; no normalization happens here.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Values that can be linearly interpolated by a transition
pub trait Lerp: Copy {
    fn lerp(t: f32, start: Self, end: Self) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(t: f32, start: Self, end: Self) -> Self {
        lerp(t, start, end)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(t: f32, start: Self, end: Self) -> Self {
        Vec2::new(lerp(t, start.x, end.x), lerp(t, start.y, end.y))
    }
}

impl Lerp for Rect {
    fn lerp(t: f32, start: Self, end: Self) -> Self {
        Rect::new(
            lerp(t, start.x, end.x),
            lerp(t, start.y, end.y),
            lerp(t, start.width, end.width).max(0.0),
            lerp(t, start.height, end.height).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_clamp_inverted_bounds_returns_min() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        // Length is preserved
        let w = rotate(Vec2::new(3.0, 4.0), 1.234);
        assert!((w.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        assert!(!Vec2::ZERO.normalize().is_finite());
    }

    #[test]
    fn test_lerp_is_unclamped() {
        assert_eq!(lerp(2.0, 0.0, 10.0), 20.0);
        assert_eq!(lerp(-0.5, 0.0, 10.0), -5.0);
    }

    proptest! {
        #[test]
        fn prop_lerp_endpoints(a in -1e4f32..1e4, b in -1e4f32..1e4) {
            prop_assert_eq!(lerp(0.0, a, b), a);
            prop_assert!((lerp(1.0, a, b) - b).abs() <= 1e-3);
        }

        #[test]
        fn prop_vec2_lerp_endpoints(
            ax in -1e4f32..1e4, ay in -1e4f32..1e4,
            bx in -1e4f32..1e4, by in -1e4f32..1e4,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(<Vec2 as Lerp>::lerp(0.0, a, b), a);
            let end = <Vec2 as Lerp>::lerp(1.0, a, b);
            prop_assert!((end - b).length() <= 1e-2);
        }
    }
}
