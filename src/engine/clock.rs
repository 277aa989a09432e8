//! Frame clock
//!
//! Turns display-refresh timestamps into clamped frame deltas. The platform
//! layer owns the actual scheduling (animation frames on the web, a fixed-rate
//! timer natively) and asks the clock whether a frame should run.

use crate::consts::{FRAME_MS, MAX_FRAME_DT_MS};

/// Frames averaged for the FPS estimate
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    running: bool,
    last_time: Option<f64>,
    frame_count: u64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            running: false,
            last_time: None,
            frame_count: 0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Start counting frames. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        *self = Self::new();
        self.running = true;
        true
    }

    /// Stop the clock. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Register a frame at `time` (ms) and return its delta.
    ///
    /// The first frame after start advances by one nominal frame; later deltas
    /// are clamped to [`MAX_FRAME_DT_MS`]. Returns `None` while stopped.
    pub fn tick(&mut self, time: f64) -> Option<f64> {
        if !self.running {
            return None;
        }

        let dt = match self.last_time {
            Some(last) => (time - last).max(0.0),
            None => FRAME_MS,
        };
        self.last_time = Some(time);
        self.frame_count += 1;

        // Rolling FPS over the last 60 frames
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        if self.frame_count >= FPS_WINDOW as u64 {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }

        Some(dt.min(MAX_FRAME_DT_MS))
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_idempotent() {
        let mut clock = FrameClock::new();
        assert!(clock.start());
        assert!(!clock.start());
        assert!(clock.stop());
        assert!(!clock.stop());
        assert!(!clock.is_running());
    }

    #[test]
    fn test_no_ticks_while_stopped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(16.0), None);
        clock.start();
        clock.stop();
        assert_eq!(clock.tick(32.0), None);
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn test_deltas() {
        let mut clock = FrameClock::new();
        clock.start();
        assert_eq!(clock.tick(1000.0), Some(FRAME_MS));
        assert_eq!(clock.tick(1016.0), Some(16.0));
        // Backgrounded tab: huge gap is clamped
        assert_eq!(clock.tick(6016.0), Some(MAX_FRAME_DT_MS));
        // Timestamps going backwards never produce negative time
        assert_eq!(clock.tick(6000.0), Some(0.0));
    }

    #[test]
    fn test_restart_forgets_last_frame() {
        let mut clock = FrameClock::new();
        clock.start();
        clock.tick(100.0);
        clock.stop();
        clock.start();
        assert_eq!(clock.tick(5000.0), Some(FRAME_MS));
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        clock.start();
        for i in 0..120 {
            clock.tick(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(clock.fps(), 60);
    }
}
