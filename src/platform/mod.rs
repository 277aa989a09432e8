//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (animation frames on the web, fixed-rate timer natively)
//! - Pointer input
//! - Upward score callbacks

pub mod frame;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame::PendingFrame;
