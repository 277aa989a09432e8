//! Spawn timing and randomized placement

use glam::Vec2;
use rand::Rng;

use super::entity::{EntityArena, EntityId};
use super::layout::Bounds;
use crate::Color;
use crate::settings::{BubbleSettings, ValueRange};

/// Upper bound on spawns released by a single frame
pub const MAX_SPAWNS_PER_TICK: u32 = 4;

/// Fixed-interval timer advanced by frame deltas
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            // Sub-millisecond intervals would spin the frame
            interval_ms: interval_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt_ms` and return how many intervals elapsed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms < self.interval_ms {
            return 0;
        }
        let due = (self.elapsed_ms / self.interval_ms).floor();
        self.elapsed_ms -= due * self.interval_ms;
        (due as u32).min(MAX_SPAWNS_PER_TICK)
    }
}

/// Uniform point inside `bounds` shrunk by `margin` on every side.
///
/// An axis too short to leave room for the margin places the point on its centre.
pub fn spawn_point<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, margin: f32) -> Vec2 {
    Vec2::new(
        axis_position(rng, bounds.width, margin),
        axis_position(rng, bounds.height, margin),
    )
}

fn axis_position<R: Rng + ?Sized>(rng: &mut R, extent: f32, margin: f32) -> f32 {
    let lo = margin;
    let hi = extent - margin;
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        extent / 2.0
    }
}

/// Uniform sample from an inclusive range
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> f32 {
    if range.max > range.min {
        rng.random_range(range.min..=range.max)
    } else {
        range.min
    }
}

/// Uniform slot index in `0..slot_count`
pub fn pick_slot<R: Rng + ?Sized>(rng: &mut R, slot_count: usize) -> usize {
    rng.random_range(0..slot_count.max(1))
}

/// Create one bubble in the arena with size, speed and color drawn from settings
pub fn spawn_bubble<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &BubbleSettings,
    bounds: Bounds,
    arena: &mut EntityArena,
    now_ms: f64,
) -> EntityId {
    let radius = sample_range(rng, settings.size_range);
    let pos = spawn_point(rng, bounds, radius);
    let speed = sample_range(rng, settings.speed_range);
    let color = match settings.color_palette.len() {
        0 => Color::ACCENT,
        n => settings.color_palette[rng.random_range(0..n)],
    };
    // Bubbles float upward
    arena.insert(pos, radius, color, Vec2::new(0.0, -speed), now_ms)
}
