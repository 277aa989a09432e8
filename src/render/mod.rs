//! Drawing surface abstraction
//!
//! The engine only ever talks to a [`Surface`]. The browser build paints to a
//! 2D canvas; tests and the native demo record draw commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::paint;

use glam::Vec2;

use crate::engine::Rect;
use crate::{Color, EngineError};

/// A 2D drawing target sized to the embedding container
pub trait Surface {
    /// Drawing buffer size, or `None` once the surface is gone
    fn size(&self) -> Option<Vec2>;

    fn clear(&mut self) -> Result<(), EngineError>;

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        alpha: f32,
    ) -> Result<(), EngineError>;

    fn fill_bubble(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), EngineError>;

    fn fill_slot(&mut self, rect: Rect, color: Color, active: bool) -> Result<(), EngineError>;
}

/// Usable drawing size: present and non-empty
pub fn usable_size(surface: &dyn Surface) -> Option<Vec2> {
    surface.size().filter(|s| s.x > 0.0 && s.y > 0.0)
}
