//! Data-driven battle configuration
//!
//! Every field has a default matching the demo battle, so a partial JSON
//! document only overrides what it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Milliseconds between ticks (40 ticks per second)
    pub tick_ms: u32,
    /// Seed for pattern randomness
    pub seed: u64,

    // === Player ===
    pub player_start: Vec2,
    pub max_health: u32,
    pub defense: u32,
    /// Pixels per tick
    pub player_speed: f32,
    /// Pixels per tick while the slow key is held
    pub slow_speed: f32,
    /// Distance the player center keeps from the board edges
    pub board_margin: f32,
    /// Hurtbox top-left relative to the player position
    pub hurtbox_offset: Vec2,
    pub hurtbox_size: Vec2,
    /// Ticks of invincibility after a hit
    pub invincibility_frames: u32,

    // === Board ===
    pub board: Rect,

    // === Menu ===
    /// Player position when the first menu option is highlighted
    pub menu_anchor: Vec2,
    /// Vertical distance between option anchors
    pub menu_spacing: f32,
    /// Length of the player slide on phase changes
    pub slide_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: 25,
            seed: 0x5eed,

            player_start: Vec2::new(720.0, 770.0),
            max_health: 50,
            defense: 0,
            player_speed: 8.0,
            slow_speed: 4.0,
            board_margin: 25.0,
            hurtbox_offset: Vec2::new(-15.0, -15.0),
            hurtbox_size: Vec2::new(30.0, 20.0),
            invincibility_frames: 40,

            board: Rect::new(360.0, 540.0, 720.0, 460.0),

            menu_anchor: Vec2::new(60.0, 80.0),
            menu_spacing: 120.0,
            slide_ticks: 10,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Values that parse but make no
    /// sense (see [`Tuning::validate`]) are reported as errors too.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on: non-negative box sizes,
    /// finite numbers and a non-zero tick interval.
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("hurtbox_size", self.hurtbox_size),
            ("board", Vec2::new(self.board.width, self.board.height)),
        ];
        for (name, size) in sizes {
            // Also rejects NaN
            if !(size.x >= 0.0 && size.y >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, size));
            }
        }

        let finite = [
            ("player_start", self.player_start.is_finite()),
            ("hurtbox_offset", self.hurtbox_offset.is_finite()),
            ("menu_anchor", self.menu_anchor.is_finite()),
            ("board", self.board.origin().is_finite()),
            ("player_speed", self.player_speed.is_finite()),
            ("slow_speed", self.slow_speed.is_finite()),
            ("board_margin", self.board_margin.is_finite()),
            ("menu_spacing", self.menu_spacing.is_finite()),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, ok)| !ok) {
            return Err(format!("{} must be finite", name));
        }

        if self.tick_ms == 0 {
            return Err("tick_ms must be at least 1".to_owned());
        }
        Ok(())
    }

    /// Parse tuning overrides, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "defense": 5, "player_speed": 6.0 }"#).unwrap();
        assert_eq!(tuning.defense, 5);
        assert_eq!(tuning.player_speed, 6.0);
        assert_eq!(tuning.max_health, 50);
        assert_eq!(tuning.board, Rect::new(360.0, 540.0, 720.0, 460.0));
    }

    #[test]
    fn test_nested_board_override() {
        let tuning = Tuning::from_json(
            r#"{ "board": { "x": 0.0, "y": 0.0, "width": 100.0, "height": 50.0 } }"#,
        )
        .unwrap();
        assert_eq!(tuning.board.right(), 100.0);
    }

    #[test]
    fn test_negative_sizes_are_rejected() {
        let err = Tuning::from_json(r#"{ "hurtbox_size": [-30.0, 20.0] }"#).unwrap_err();
        assert!(err.to_string().contains("hurtbox_size"));
        assert_eq!(
            Tuning::from_json_or_default(r#"{ "hurtbox_size": [-30.0, 20.0] }"#),
            Tuning::default()
        );

        let board = r#"{ "board": { "x": 0.0, "y": 0.0, "width": 100.0, "height": -1.0 } }"#;
        assert_eq!(Tuning::from_json_or_default(board), Tuning::default());
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        assert!(Tuning::from_json(r#"{ "tick_ms": 0 }"#).is_err());
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert_eq!(Tuning::from_json_or_default("{ not json"), Tuning::default());
    }
}
