//! Bubble pop: drifting targets spawned on a timer

use glam::Vec2;
use rand_pcg::Pcg32;

use super::entity::EntityArena;
use super::hit::resolve_hit;
use super::layout::Bounds;
use super::spawn::{SpawnTimer, spawn_bubble};
use super::variant::{GameVariant, PointerOutcome, Scene};
use crate::settings::{BubbleSettings, VariantKind};

#[derive(Debug, Clone)]
pub struct BubblePop {
    settings: BubbleSettings,
    arena: EntityArena,
    timer: SpawnTimer,
}

impl BubblePop {
    pub fn new(settings: BubbleSettings) -> Self {
        let timer = SpawnTimer::new(settings.spawn_interval_ms);
        Self {
            settings,
            arena: EntityArena::new(),
            timer,
        }
    }

    pub fn settings(&self) -> &BubbleSettings {
        &self.settings
    }

    pub fn arena(&self) -> &EntityArena {
        &self.arena
    }
}

impl GameVariant for BubblePop {
    fn kind(&self) -> VariantKind {
        VariantKind::BubblePop
    }

    fn points_per_hit(&self) -> u64 {
        self.settings.points_per_hit
    }

    fn reset(&mut self) {
        self.arena.clear();
        self.timer.reset();
    }

    fn update(&mut self, dt_ms: f64, now_ms: f64, bounds: Bounds, rng: &mut Pcg32) {
        let drifted_off = self.arena.step_all(dt_ms, bounds);
        if drifted_off > 0 {
            log::trace!("{drifted_off} bubble(s) left the scene");
        }

        // New bubbles appear after the movement pass, exactly at their spawn point
        for _ in 0..self.timer.advance(dt_ms) {
            let id = spawn_bubble(rng, &self.settings, bounds, &mut self.arena, now_ms);
            log::trace!("Spawned bubble {:?}", id);
        }
    }

    fn resolve_pointer(
        &mut self,
        point: Vec2,
        now_ms: f64,
        bounds: Bounds,
        _rng: &mut Pcg32,
    ) -> PointerOutcome {
        if !bounds.contains(point) {
            return PointerOutcome::Ignored;
        }
        let Some(id) = resolve_hit(&self.arena, point, self.settings.hit_tolerance, bounds) else {
            return PointerOutcome::Miss;
        };
        match self.arena.remove(id) {
            Some(bubble) => PointerOutcome::Hit {
                id,
                reaction_ms: now_ms - bubble.spawned_at_ms,
            },
            None => PointerOutcome::Miss,
        }
    }

    fn scene(&self) -> Scene<'_> {
        Scene::Bubbles(&self.arena)
    }

    fn live_targets(&self) -> usize {
        self.arena.len()
    }
}
