//! Target grid: one active slot among a fixed grid
//!
//! The first target lights up on the first frame. From then on exactly one
//! slot is active: it moves every interval, and a hit moves it immediately.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::entity::EntityId;
use super::hit::slot_hit;
use super::layout::{Bounds, SlotLayout};
use super::spawn::{SpawnTimer, pick_slot};
use super::variant::{GameVariant, PointerOutcome, Scene};
use crate::settings::{TargetSettings, VariantKind};

/// The currently lit slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTarget {
    pub id: EntityId,
    pub slot: usize,
    pub activated_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct TargetGrid {
    settings: TargetSettings,
    layout: SlotLayout,
    layout_bounds: Option<Bounds>,
    active: Option<ActiveTarget>,
    timer: SpawnTimer,
    next_id: u32,
}

impl TargetGrid {
    pub fn new(settings: TargetSettings) -> Self {
        let timer = SpawnTimer::new(settings.target_interval_ms);
        Self {
            settings,
            layout: SlotLayout::default(),
            layout_bounds: None,
            active: None,
            timer,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &TargetSettings {
        &self.settings
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    pub fn active(&self) -> Option<ActiveTarget> {
        self.active
    }

    // Refit the grid when the surface changes size
    fn ensure_layout(&mut self, bounds: Bounds) {
        if self.layout_bounds != Some(bounds) {
            self.layout = SlotLayout::fit(
                bounds,
                self.settings.slot_count,
                self.settings.columns,
                self.settings.gap,
            );
            self.layout_bounds = Some(bounds);
            // A target on a slot that no longer fits can't be seen or hit
            if self.active.is_some_and(|t| t.slot >= self.layout.len()) {
                self.active = None;
            }
        }
    }

    /// Light a new random slot, superseding the current one.
    /// Nothing is lit while the scene is too small for the grid.
    fn activate(&mut self, now_ms: f64, rng: &mut Pcg32) {
        if self.layout.is_empty() {
            self.active = None;
            return;
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let slot = pick_slot(rng, self.layout.len());
        self.active = Some(ActiveTarget {
            id,
            slot,
            activated_at_ms: now_ms,
        });
        self.timer.reset();
        log::trace!("Target {:?} active on slot {}", id, slot);
    }
}

impl GameVariant for TargetGrid {
    fn kind(&self) -> VariantKind {
        VariantKind::TargetGrid
    }

    fn points_per_hit(&self) -> u64 {
        self.settings.points_per_hit
    }

    fn reset(&mut self) {
        self.active = None;
        self.timer.reset();
    }

    fn update(&mut self, dt_ms: f64, now_ms: f64, bounds: Bounds, rng: &mut Pcg32) {
        self.ensure_layout(bounds);
        if self.active.is_none() || self.timer.advance(dt_ms) > 0 {
            self.activate(now_ms, rng);
        }
    }

    fn resolve_pointer(
        &mut self,
        point: Vec2,
        now_ms: f64,
        bounds: Bounds,
        rng: &mut Pcg32,
    ) -> PointerOutcome {
        if !bounds.contains(point) {
            return PointerOutcome::Ignored;
        }
        self.ensure_layout(bounds);
        if self.layout.is_empty() {
            return PointerOutcome::Ignored;
        }

        let tapped = self.layout.slot_at(point);
        match self.active {
            Some(target) if slot_hit(Some(target.slot), tapped) => {
                self.activate(now_ms, rng);
                PointerOutcome::Hit {
                    id: target.id,
                    reaction_ms: now_ms - target.activated_at_ms,
                }
            }
            _ => PointerOutcome::Miss,
        }
    }

    fn scene(&self) -> Scene<'_> {
        Scene::Slots {
            layout: &self.layout,
            active: self.active.map(|t| t.slot),
            color: self.settings.color,
        }
    }

    fn live_targets(&self) -> usize {
        usize::from(self.active.is_some())
    }
}
