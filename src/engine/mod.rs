//! Capture mini-game engine
//!
//! Everything that decides what happens in a session lives here:
//! - Frame-driven timing only (spawn timers advance with the frame clock)
//! - Seeded RNG only
//! - Entities addressed by stable ID, iterated in spawn order
//! - No browser dependencies; drawing goes through [`crate::render::Surface`]

pub mod bubble;
pub mod clock;
pub mod entity;
pub mod hit;
pub mod layout;
pub mod score;
pub mod session;
pub mod spawn;
pub mod stats;
pub mod target;
pub mod variant;

pub use bubble::BubblePop;
pub use clock::FrameClock;
pub use entity::{Entity, EntityArena, EntityId};
pub use hit::{resolve_hit, slot_hit};
pub use layout::{Bounds, Rect, SlotLayout};
pub use score::{ScoreAccumulator, ScoreEvent, ScoreSink};
pub use session::{FrameOutcome, SessionController, SessionState};
pub use spawn::SpawnTimer;
pub use stats::{EndReason, SessionStats, SessionSummary};
pub use target::TargetGrid;
pub use variant::{Game, GameVariant, PointerOutcome, Scene};
