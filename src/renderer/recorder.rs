//! Headless renderer that records draw calls

use glam::Vec2;
use serde::Serialize;

use super::Renderer;
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeRect {
        rect: Rect,
        color: String,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: String,
    },
    FillText {
        text: String,
        pos: Vec2,
        size: f32,
        color: String,
    },
    DrawImage {
        image_id: String,
        pos: Vec2,
    },
    Save,
    Translate(Vec2),
    Restore,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Text of every `FillText` in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Recorded frame as JSON, for dumping from the native demo
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_owned(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.to_owned(),
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_owned(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: color.to_owned(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: &str) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            pos,
            size,
            color: color.to_owned(),
        });
    }

    fn draw_image(&mut self, image_id: &str, pos: Vec2) {
        self.commands.push(DrawCommand::DrawImage {
            image_id: image_id.to_owned(),
            pos,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
}
