//! Headless surface that records draw calls

use glam::Vec2;

use super::Surface;
use crate::engine::Rect;
use crate::{Color, EngineError};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Vec2, to: Vec2 },
    Bubble { center: Vec2, radius: f32, color: Color },
    Slot { rect: Rect, active: bool },
}

/// Keeps the commands of the most recent frame (since the last `clear`)
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    available: bool,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            available: true,
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Simulate the surface being detached or restored
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (calls to `clear`)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Bubble { .. }))
    }

    fn check(&self) -> Result<(), EngineError> {
        if self.available {
            Ok(())
        } else {
            Err(EngineError::SurfaceUnavailable)
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Option<Vec2> {
        self.available.then_some(self.size)
    }

    fn clear(&mut self) -> Result<(), EngineError> {
        self.check()?;
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        _color: Color,
        _alpha: f32,
    ) -> Result<(), EngineError> {
        self.check()?;
        self.commands.push(DrawCommand::Line { from, to });
        Ok(())
    }

    fn fill_bubble(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), EngineError> {
        self.check()?;
        self.commands.push(DrawCommand::Bubble {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_slot(&mut self, rect: Rect, _color: Color, active: bool) -> Result<(), EngineError> {
        self.check()?;
        self.commands.push(DrawCommand::Slot { rect, active });
        Ok(())
    }
}
