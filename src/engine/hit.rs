//! Pointer hit-testing
//!
//! Input is forgiving: a tap counts if it lands within `radius * tolerance`
//! of an entity's centre. Overlapping candidates resolve to the topmost
//! (most recently spawned) entity, which is the one drawn last.

use glam::Vec2;

use super::entity::{EntityArena, EntityId};
use super::layout::Bounds;

/// Entity hit by a tap at `point`, if any.
///
/// Points outside the scene never hit anything.
pub fn resolve_hit(
    arena: &EntityArena,
    point: Vec2,
    tolerance: f32,
    bounds: Bounds,
) -> Option<EntityId> {
    if !bounds.contains(point) {
        return None;
    }
    arena
        .iter()
        .rev()
        .find(|e| e.pos.distance_squared(point) <= (e.radius * tolerance).powi(2))
        .map(|e| e.id)
}

/// A slot tap only counts on the active slot
pub fn slot_hit(active: Option<usize>, tapped: Option<usize>) -> bool {
    matches!((active, tapped), (Some(a), Some(t)) if a == t)
}
