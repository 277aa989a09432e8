//! Session controller
//!
//! Two states only. `start` moves Idle → Active after checking the surface;
//! `stop`, the duration end condition, or losing the surface move
//! Active → Idle and emit the final score exactly once. Frames and taps
//! arriving while Idle are no-ops.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::FrameClock;
use super::layout::Bounds;
use super::score::{ScoreAccumulator, ScoreSink};
use super::stats::{EndReason, SessionStats, SessionSummary};
use super::variant::{GameVariant, PointerOutcome};
use crate::EngineError;
use crate::render::{self, Surface, usable_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// Result of driving one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Session is idle; the caller should not schedule another frame
    Inactive,
    /// Schedule the next frame
    Continue,
    /// The session ended during this frame
    Ended(SessionSummary),
}

pub struct SessionController<V: GameVariant, S: ScoreSink> {
    variant: V,
    sink: S,
    state: SessionState,
    clock: FrameClock,
    score: ScoreAccumulator,
    stats: SessionStats,
    rng: Pcg32,
    bounds: Bounds,
    duration_ms: Option<f64>,
    started_at_ms: f64,
}

impl<V: GameVariant, S: ScoreSink> SessionController<V, S> {
    /// `duration_ms` ends each session automatically; `None` runs until stopped
    pub fn new(variant: V, sink: S, duration_ms: Option<f64>, seed: u64) -> Self {
        let score = ScoreAccumulator::new(variant.points_per_hit());
        Self {
            variant,
            sink,
            state: SessionState::Idle,
            clock: FrameClock::new(),
            score,
            stats: SessionStats::default(),
            rng: Pcg32::seed_from_u64(seed),
            bounds: Bounds::new(0.0, 0.0),
            duration_ms,
            started_at_ms: 0.0,
        }
    }

    /// Enter Active. Fails, staying Idle, if the surface cannot be drawn to.
    pub fn start(&mut self, surface: &dyn Surface, now_ms: f64) -> Result<(), EngineError> {
        if self.state == SessionState::Active {
            return Ok(());
        }
        let size = usable_size(surface).ok_or(EngineError::SurfaceUnavailable)?;

        self.bounds = Bounds::new(size.x, size.y);
        self.score.reset(self.variant.points_per_hit());
        self.stats = SessionStats::default();
        self.variant.reset();
        self.clock.start();
        self.started_at_ms = now_ms;
        self.state = SessionState::Active;

        log::info!(
            "Session started: {} on {}x{} surface",
            self.variant.kind().as_str(),
            size.x,
            size.y
        );
        Ok(())
    }

    /// Explicit stop. Returns the summary, or `None` if already idle.
    pub fn stop(&mut self, now_ms: f64) -> Option<SessionSummary> {
        self.finish(now_ms, EndReason::Stopped)
    }

    /// Advance and redraw one frame
    pub fn frame(&mut self, surface: &mut dyn Surface, now_ms: f64) -> FrameOutcome {
        if self.state != SessionState::Active {
            return FrameOutcome::Inactive;
        }
        let Some(dt) = self.clock.tick(now_ms) else {
            return FrameOutcome::Inactive;
        };

        let Some(size) = usable_size(surface) else {
            log::warn!("Drawing surface went away, ending session");
            return self.end_frame(now_ms, EndReason::SurfaceLost);
        };
        self.bounds = Bounds::new(size.x, size.y);

        self.variant.update(dt, now_ms, self.bounds, &mut self.rng);

        if let Some(limit) = self.duration_ms {
            if now_ms - self.started_at_ms >= limit {
                return self.end_frame(now_ms, EndReason::DurationElapsed);
            }
        }

        if let Err(e) = render::paint(surface, self.variant.scene()) {
            log::warn!("Render failed, ending session: {}", e);
            return self.end_frame(now_ms, EndReason::SurfaceLost);
        }

        FrameOutcome::Continue
    }

    /// Resolve a tap in surface-local coordinates
    pub fn pointer(&mut self, point: Vec2, now_ms: f64) -> PointerOutcome {
        if self.state != SessionState::Active {
            return PointerOutcome::Ignored;
        }

        let outcome = self
            .variant
            .resolve_pointer(point, now_ms, self.bounds, &mut self.rng);
        match outcome {
            PointerOutcome::Hit { reaction_ms, .. } => {
                self.stats.record_hit(reaction_ms);
                let score = self.score.record_hit(&mut self.sink);
                log::debug!("Hit after {:.0} ms, score {}", reaction_ms, score);
            }
            PointerOutcome::Miss => self.stats.record_miss(),
            PointerOutcome::Ignored => {}
        }
        outcome
    }

    fn end_frame(&mut self, now_ms: f64, reason: EndReason) -> FrameOutcome {
        match self.finish(now_ms, reason) {
            Some(summary) => FrameOutcome::Ended(summary),
            None => FrameOutcome::Inactive,
        }
    }

    fn finish(&mut self, now_ms: f64, reason: EndReason) -> Option<SessionSummary> {
        if self.state != SessionState::Active {
            return None;
        }
        self.clock.stop();
        self.variant.reset();
        self.state = SessionState::Idle;

        let final_score = self.score.score();
        self.sink.game_over(final_score);

        let summary = SessionSummary {
            variant: self.variant.kind(),
            final_score,
            hits: self.stats.hits,
            misses: self.stats.misses,
            accuracy: self.stats.accuracy(),
            mean_reaction_ms: self.stats.mean_reaction_ms(),
            duration_ms: (now_ms - self.started_at_ms).max(0.0),
            end_reason: reason,
        };
        log::info!(
            "Session ended ({:?}): score {}, {} hits, {} misses",
            reason,
            final_score,
            summary.hits,
            summary.misses
        );
        Some(summary)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
