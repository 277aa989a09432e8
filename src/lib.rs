//! NeuroWeave Play - capture mini-games for the screening session
//!
//! Core modules:
//! - `engine`: Session controller, frame clock, spawning, hit-testing, scoring
//! - `render`: Drawing surface abstraction and scene painting
//! - `platform`: Browser binding (canvas, animation frames, pointer events) and native clock
//! - `settings`: Per-variant configuration loaded from JSON
//! - `history`: Log of recently completed sessions

pub mod color;
pub mod engine;
pub mod error;
pub mod history;
pub mod platform;
pub mod render;
pub mod settings;

pub use color::Color;
pub use error::EngineError;
pub use history::SessionHistory;
pub use settings::{BubbleSettings, SessionSettings, TargetSettings};

/// Engine configuration constants
pub mod consts {
    /// Nominal frame duration (60 Hz display)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest delta a single frame may advance the scene by
    pub const MAX_FRAME_DT_MS: f64 = 100.0;

    /// Default scene size (canvas drawing buffer)
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 450.0;

    /// Background grid spacing in pixels
    pub const GRID_SPACING: f32 = 40.0;

    /// Bubble pop defaults
    pub const BUBBLE_SPAWN_INTERVAL_MS: f64 = 800.0;
    pub const BUBBLE_MIN_RADIUS: f32 = 12.0;
    pub const BUBBLE_MAX_RADIUS: f32 = 27.0;
    /// Drift speed in pixels per second (1.5-3.5 px per 60 Hz frame)
    pub const BUBBLE_MIN_SPEED: f32 = 90.0;
    pub const BUBBLE_MAX_SPEED: f32 = 210.0;
    pub const BUBBLE_POINTS: u64 = 10;
    /// Forgiveness multiplier applied to bubble radius on hit-test
    pub const HIT_TOLERANCE: f32 = 2.5;

    /// Target grid defaults
    pub const TARGET_INTERVAL_MS: f64 = 1500.0;
    pub const TARGET_SLOTS: usize = 9;
    pub const TARGET_COLUMNS: usize = 3;
    pub const TARGET_GAP: f32 = 24.0;
    pub const TARGET_POINTS: u64 = 20;
}
