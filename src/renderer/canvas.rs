//! HTML canvas 2D context backend

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::Renderer;
use crate::sim::Rect;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    document: Document,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Wrap the canvas' 2D context. Images are looked up in `document` by id.
    pub fn new(canvas: &HtmlCanvasElement, document: Document) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            document,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn warn_on_err(what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("canvas {} failed: {:?}", what, e);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let arc = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        Self::warn_on_err("arc", arc);
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&format!("{}px monospace", size));
        let result = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
        Self::warn_on_err("fill_text", result);
    }

    fn draw_image(&mut self, image_id: &str, pos: Vec2) {
        let Some(image) = self
            .document
            .get_element_by_id(image_id)
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
        else {
            log::debug!("no image element '{}'", image_id);
            return;
        };
        let result = self
            .ctx
            .draw_image_with_html_image_element(&image, pos.x as f64, pos.y as f64);
        Self::warn_on_err("draw_image", result);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, offset: Vec2) {
        let result = self.ctx.translate(offset.x as f64, offset.y as f64);
        Self::warn_on_err("translate", result);
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
