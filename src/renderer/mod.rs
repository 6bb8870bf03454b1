//! Drawing capability and the per-frame draw pass
//!
//! The simulation only ever sees `&mut dyn Renderer`. The browser build draws
//! onto a 2D canvas context, while tests and the native demo record commands.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use recorder::{DrawCommand, RecordingRenderer};

use glam::Vec2;

use crate::sim::{BulletShape, GameState, Rect};

/// CSS color strings
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const YELLOW: &str = "#FFFF00";
    pub const WHITE: &str = "#FFFFFF";
    pub const ORANGE: &str = "#FF8000";
    /// Heart color on blink frames while invincible
    pub const RED_FADED: &str = "#FF000020";
}

/// Immediate mode 2D drawing, in logical screen coordinates
pub trait Renderer {
    /// Clear the whole canvas
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_polygon(&mut self, points: &[Vec2], color: &str);
    /// `pos` is the left end of the baseline
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: &str);
    /// Draw a preloaded image by element id with its top-left at `pos`
    fn draw_image(&mut self, image_id: &str, pos: Vec2);
    fn save(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn restore(&mut self);
}

/// Heart outline around the origin, point facing down
const HEART: [Vec2; 8] = [
    Vec2::new(0.0, -8.0),
    Vec2::new(8.0, -16.0),
    Vec2::new(16.0, -12.0),
    Vec2::new(16.0, -2.0),
    Vec2::new(0.0, 16.0),
    Vec2::new(-16.0, -2.0),
    Vec2::new(-16.0, -12.0),
    Vec2::new(-8.0, -16.0),
];

/// Draw one frame: visible entities in registry order, then bullets, then
/// the player on top
pub fn draw_frame(state: &GameState, r: &mut dyn Renderer) {
    r.clear();

    for (_, entity) in state.entities.iter().filter(|(_, e)| e.visible) {
        entity.draw(&state.world, r);
    }

    for bullet in &state.world.bullets {
        match bullet.shape {
            BulletShape::Circular { pos, radius } => r.fill_circle(pos, radius, colors::WHITE),
            BulletShape::Rectangular { shape } => r.fill_rect(shape, colors::WHITE),
        }
    }

    draw_player(state, r);
}

fn draw_player(state: &GameState, r: &mut dyn Renderer) {
    let player = &state.world.player;
    let color = if player.invincible_frames % 4 == 1 {
        colors::RED_FADED
    } else {
        colors::RED
    };
    let points: Vec<Vec2> = HEART.iter().map(|&p| player.pos + p).collect();
    r.fill_polygon(&points, color);
}
