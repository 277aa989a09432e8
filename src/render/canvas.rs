//! 2D canvas surface (WASM only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::engine::Rect;
use crate::{Color, EngineError};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the canvas' 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| EngineError::SurfaceUnavailable)?
            .ok_or(EngineError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Convert a CSS-pixel offset within the element to drawing-buffer pixels
    pub fn to_surface_point(&self, offset_x: f32, offset_y: f32) -> Vec2 {
        let client_w = self.canvas.client_width() as f32;
        let client_h = self.canvas.client_height() as f32;
        let sx = if client_w > 0.0 {
            self.canvas.width() as f32 / client_w
        } else {
            1.0
        };
        let sy = if client_h > 0.0 {
            self.canvas.height() as f32 / client_h
        } else {
            1.0
        };
        Vec2::new(offset_x * sx, offset_y * sy)
    }
}

fn draw_err(e: JsValue) -> EngineError {
    EngineError::Draw(format!("{:?}", e))
}

impl Surface for CanvasSurface {
    fn size(&self) -> Option<Vec2> {
        if !self.canvas.is_connected() {
            return None;
        }
        Some(Vec2::new(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        ))
    }

    fn clear(&mut self) -> Result<(), EngineError> {
        let size = self.size().ok_or(EngineError::SurfaceUnavailable)?;
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        alpha: f32,
    ) -> Result<(), EngineError> {
        self.ctx.set_stroke_style_str(&color.to_rgba(alpha));
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_bubble(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), EngineError> {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);

        // Highlight offset toward the top-left for a glassy look
        let gradient = self
            .ctx
            .create_radial_gradient(x - r / 3.0, y - r / 3.0, 1.0, x, y, r)
            .map_err(draw_err)?;
        gradient.add_color_stop(0.0, "white").map_err(draw_err)?;
        gradient
            .add_color_stop(0.3, &color.to_hex())
            .map_err(draw_err)?;
        gradient
            .add_color_stop(1.0, "rgba(0, 0, 0, 0)")
            .map_err(draw_err)?;

        self.ctx.begin_path();
        self.ctx
            .arc(x, y, r, 0.0, std::f64::consts::TAU)
            .map_err(draw_err)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&Color::WHITE.to_rgba(0.2));
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();
        self.ctx.close_path();
        Ok(())
    }

    fn fill_slot(&mut self, rect: Rect, color: Color, active: bool) -> Result<(), EngineError> {
        let (x, y) = (rect.min.x as f64, rect.min.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);

        if active {
            self.ctx.set_fill_style_str(&color.to_hex());
            self.ctx.fill_rect(x, y, w, h);
            self.ctx.set_stroke_style_str(&Color::WHITE.to_rgba(0.2));
            self.ctx.set_line_width(4.0);
        } else {
            self.ctx.set_fill_style_str(&Color::WHITE.to_rgba(0.02));
            self.ctx.fill_rect(x, y, w, h);
            self.ctx.set_stroke_style_str(&Color::WHITE.to_rgba(0.05));
            self.ctx.set_line_width(1.0);
        }
        self.ctx.stroke_rect(x, y, w, h);
        Ok(())
    }
}
