//! Spawned targets and the arena that owns them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::Bounds;
use crate::Color;

/// Stable entity handle. IDs are never reused within an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// A drifting target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Pixels per second
    pub vel: Vec2,
    /// Frame timestamp (ms) the entity appeared at
    pub spawned_at_ms: f64,
}

impl Entity {
    /// Advance position by `dt_ms`
    pub fn step(&mut self, dt_ms: f64) {
        self.pos += self.vel * (dt_ms / 1000.0) as f32;
    }

    /// Still visible on a surface of the given bounds
    pub fn is_on_screen(&self, bounds: Bounds) -> bool {
        bounds.overlaps_circle(self.pos, self.radius)
    }
}

/// Owned entity collection, kept in spawn order (ascending ID = draw order)
#[derive(Debug, Clone, Default)]
pub struct EntityArena {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityArena {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an entity and return its new ID
    pub fn insert(
        &mut self,
        pos: Vec2,
        radius: f32,
        color: Color,
        vel: Vec2,
        spawned_at_ms: f64,
    ) -> EntityId {
        let id = EntityId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.entities.push(Entity {
            id,
            pos,
            radius,
            color,
            vel,
            spawned_at_ms,
        });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    /// Remove by ID. Removing an already destroyed entity returns `None`.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.index_of(id).map(|i| self.entities.remove(i))
    }

    /// Advance every entity, then drop the ones that left the scene.
    /// Returns how many were removed.
    pub fn step_all(&mut self, dt_ms: f64, bounds: Bounds) -> usize {
        for entity in &mut self.entities {
            entity.step(dt_ms);
        }
        let before = self.entities.len();
        self.entities.retain(|e| e.is_on_screen(bounds));
        before - self.entities.len()
    }

    /// Drop all entities. IDs keep counting up.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Iterate in spawn order (oldest first)
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn newest(&self) -> Option<&Entity> {
        self.entities.last()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // Vec stays sorted by ID since IDs only grow
    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(arena: &mut EntityArena, x: f32) -> EntityId {
        arena.insert(Vec2::new(x, 50.0), 10.0, Color::ACCENT, Vec2::ZERO, 0.0)
    }

    #[test]
    fn test_ids_are_stable_across_removal() {
        let mut arena = EntityArena::new();
        let a = add(&mut arena, 10.0);
        let b = add(&mut arena, 20.0);
        let c = add(&mut arena, 30.0);

        assert!(arena.remove(b).is_some());
        assert_eq!(arena.get(a).unwrap().pos.x, 10.0);
        assert_eq!(arena.get(c).unwrap().pos.x, 30.0);
        assert!(arena.remove(b).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut arena = EntityArena::new();
        let a = add(&mut arena, 10.0);
        arena.clear();
        let b = add(&mut arena, 10.0);
        assert!(b > a);
        assert!(!arena.contains(a));
    }

    #[test]
    fn test_step_all_removes_several_in_one_pass() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut arena = EntityArena::new();
        let up = Vec2::new(0.0, -100.0);
        let leaving_a = arena.insert(Vec2::new(10.0, 5.0), 2.0, Color::ACCENT, up, 0.0);
        let staying = arena.insert(Vec2::new(50.0, 90.0), 2.0, Color::ACCENT, up, 0.0);
        let leaving_b = arena.insert(Vec2::new(90.0, 5.0), 2.0, Color::ACCENT, up, 0.0);

        // 100 ms at 100 px/s moves 10 px up
        let removed = arena.step_all(100.0, bounds);
        assert_eq!(removed, 2);
        assert!(!arena.contains(leaving_a));
        assert!(!arena.contains(leaving_b));
        assert!((arena.get(staying).unwrap().pos.y - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_iteration_in_spawn_order() {
        let mut arena = EntityArena::new();
        let ids: Vec<_> = (0..4).map(|i| add(&mut arena, i as f32)).collect();
        let seen: Vec<_> = arena.iter().map(|e| e.id).collect();
        assert_eq!(seen, ids);
        assert_eq!(arena.newest().map(|e| e.id), ids.last().copied());
    }
}
