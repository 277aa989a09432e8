//! Per-frame scene painting
//!
//! Output depends only on the scene handed in: clear, background grid, then
//! every live target in draw order.

use glam::Vec2;

use super::{Surface, usable_size};
use crate::consts::GRID_SPACING;
use crate::engine::Scene;
use crate::{Color, EngineError};

/// Faint "hi-tech" grid behind the targets
const GRID_ALPHA: f32 = 0.05;

/// Redraw the whole frame
pub fn paint(surface: &mut dyn Surface, scene: Scene<'_>) -> Result<(), EngineError> {
    let size = usable_size(surface).ok_or(EngineError::SurfaceUnavailable)?;

    surface.clear()?;
    draw_grid(surface, size)?;

    match scene {
        Scene::Bubbles(arena) => {
            for bubble in arena.iter() {
                surface.fill_bubble(bubble.pos, bubble.radius, bubble.color)?;
            }
        }
        Scene::Slots {
            layout,
            active,
            color,
        } => {
            for (slot, rect) in layout.cells().iter().enumerate() {
                surface.fill_slot(*rect, color, active == Some(slot))?;
            }
        }
    }
    Ok(())
}

fn draw_grid(surface: &mut dyn Surface, size: Vec2) -> Result<(), EngineError> {
    let mut x = 0.0;
    while x < size.x {
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), Color::ACCENT, GRID_ALPHA)?;
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < size.y {
        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(size.x, y), Color::ACCENT, GRID_ALPHA)?;
        y += GRID_SPACING;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Bounds, EntityArena, SlotLayout};
    use crate::render::{DrawCommand, RecordingSurface};

    fn line_count(surface: &RecordingSurface) -> usize {
        surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    #[test]
    fn test_empty_scene_draws_background_only() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let arena = EntityArena::new();
        paint(&mut surface, Scene::Bubbles(&arena)).unwrap();

        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        // 800/40 vertical + ceil(450/40) horizontal
        assert_eq!(line_count(&surface), 20 + 12);
        assert_eq!(surface.bubbles().count(), 0);
    }

    #[test]
    fn test_bubbles_drawn_in_spawn_order() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let mut arena = EntityArena::new();
        arena.insert(Vec2::new(10.0, 10.0), 5.0, Color::ACCENT, Vec2::ZERO, 0.0);
        arena.insert(Vec2::new(20.0, 20.0), 6.0, Color::WHITE, Vec2::ZERO, 0.0);
        paint(&mut surface, Scene::Bubbles(&arena)).unwrap();

        let centers: Vec<_> = surface
            .bubbles()
            .map(|c| match c {
                DrawCommand::Bubble { center, .. } => *center,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(centers, vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]);
    }

    #[test]
    fn test_repaint_replaces_previous_frame() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let mut arena = EntityArena::new();
        let id = arena.insert(Vec2::new(10.0, 10.0), 5.0, Color::ACCENT, Vec2::ZERO, 0.0);
        paint(&mut surface, Scene::Bubbles(&arena)).unwrap();
        arena.remove(id);
        paint(&mut surface, Scene::Bubbles(&arena)).unwrap();
        assert_eq!(surface.bubbles().count(), 0);
        assert_eq!(surface.frames(), 2);
    }

    #[test]
    fn test_slots_mark_active() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let layout = SlotLayout::fit(Bounds::new(800.0, 450.0), 9, 3, 24.0);
        paint(
            &mut surface,
            Scene::Slots {
                layout: &layout,
                active: Some(2),
                color: Color::ACCENT,
            },
        )
        .unwrap();

        let active: Vec<bool> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Slot { active, .. } => Some(*active),
                _ => None,
            })
            .collect();
        assert_eq!(active.len(), 9);
        assert_eq!(active.iter().filter(|a| **a).count(), 1);
        assert!(active[2]);
    }

    #[test]
    fn test_unavailable_surface_errors() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        surface.set_available(false);
        let arena = EntityArena::new();
        assert_eq!(
            paint(&mut surface, Scene::Bubbles(&arena)),
            Err(EngineError::SurfaceUnavailable)
        );
    }
}
