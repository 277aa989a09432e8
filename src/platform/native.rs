//! Fixed-rate frame clock for targets without display refresh callbacks

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::FRAME_MS;

/// Calls a frame function roughly every 16 ms until it asks to stop
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    max_frames: Option<u64>,
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(FRAME_MS / 1000.0))
    }
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            max_frames: None,
        }
    }

    /// Stop after this many frames even if the callback keeps going
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Run `frame(now_ms)` once per period. The callback returns `false` to stop.
    /// Returns the number of frames run.
    pub fn run<F: FnMut(f64) -> bool>(&self, mut frame: F) -> u64 {
        let origin = Instant::now();
        let mut next = origin;
        let mut frames = 0;

        loop {
            if self.max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            let now_ms = origin.elapsed().as_secs_f64() * 1000.0;
            frames += 1;
            if !frame(now_ms) {
                break;
            }

            next += self.period;
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            } else {
                // Fell behind: skip missed ticks instead of bursting
                next = now;
            }
        }
        frames
    }
}
