//! Game variant interface
//!
//! The session controller is shared; what spawns, moves and counts as a hit is
//! up to the variant.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::bubble::BubblePop;
use super::entity::{EntityArena, EntityId};
use super::layout::{Bounds, SlotLayout};
use super::target::TargetGrid;
use crate::Color;
use crate::settings::{SessionSettings, VariantKind};

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Session idle or point outside the scene
    Ignored,
    Miss,
    Hit { id: EntityId, reaction_ms: f64 },
}

/// Drawable view of a variant's current state
#[derive(Debug, Clone, Copy)]
pub enum Scene<'a> {
    Bubbles(&'a EntityArena),
    Slots {
        layout: &'a SlotLayout,
        active: Option<usize>,
        color: Color,
    },
}

pub trait GameVariant {
    fn kind(&self) -> VariantKind;

    /// Points credited per confirmed hit
    fn points_per_hit(&self) -> u64;

    /// Drop every target and restart spawn timing
    fn reset(&mut self);

    /// Advance one frame. Removals happen after the movement pass.
    fn update(&mut self, dt_ms: f64, now_ms: f64, bounds: Bounds, rng: &mut Pcg32);

    /// Resolve a tap in surface-local coordinates
    fn resolve_pointer(
        &mut self,
        point: Vec2,
        now_ms: f64,
        bounds: Bounds,
        rng: &mut Pcg32,
    ) -> PointerOutcome;

    fn scene(&self) -> Scene<'_>;

    /// Number of targets currently hittable
    fn live_targets(&self) -> usize;
}

/// Either variant, picked at runtime by name
#[derive(Debug, Clone)]
pub enum Game {
    Bubbles(BubblePop),
    Targets(TargetGrid),
}

impl Game {
    pub fn new(kind: VariantKind, settings: &SessionSettings) -> Self {
        match kind {
            VariantKind::BubblePop => Game::Bubbles(BubblePop::new(settings.bubbles.clone())),
            VariantKind::TargetGrid => Game::Targets(TargetGrid::new(settings.targets.clone())),
        }
    }

    fn inner(&self) -> &dyn GameVariant {
        match self {
            Game::Bubbles(g) => g,
            Game::Targets(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn GameVariant {
        match self {
            Game::Bubbles(g) => g,
            Game::Targets(g) => g,
        }
    }
}

impl GameVariant for Game {
    fn kind(&self) -> VariantKind {
        self.inner().kind()
    }

    fn points_per_hit(&self) -> u64 {
        self.inner().points_per_hit()
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn update(&mut self, dt_ms: f64, now_ms: f64, bounds: Bounds, rng: &mut Pcg32) {
        self.inner_mut().update(dt_ms, now_ms, bounds, rng);
    }

    fn resolve_pointer(
        &mut self,
        point: Vec2,
        now_ms: f64,
        bounds: Bounds,
        rng: &mut Pcg32,
    ) -> PointerOutcome {
        self.inner_mut().resolve_pointer(point, now_ms, bounds, rng)
    }

    fn scene(&self) -> Scene<'_> {
        self.inner().scene()
    }

    fn live_targets(&self) -> usize {
        self.inner().live_targets()
    }
}
