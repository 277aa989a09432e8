//! Per-session accuracy and reaction latency

use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::settings::VariantKind;

/// Tap tallies for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    pub hits: u32,
    pub misses: u32,
    reaction_total_ms: f64,
}

impl SessionStats {
    pub fn record_hit(&mut self, reaction_ms: f64) {
        self.hits += 1;
        self.reaction_total_ms += reaction_ms.max(0.0);
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Fraction of taps that hit, `None` before the first tap
    pub fn accuracy(&self) -> Option<f32> {
        let taps = self.hits + self.misses;
        (taps > 0).then(|| self.hits as f32 / taps as f32)
    }

    /// Mean time from target appearance to hit
    pub fn mean_reaction_ms(&self) -> Option<f64> {
        (self.hits > 0).then(|| self.reaction_total_ms / self.hits as f64)
    }
}

/// Why a session went back to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    Stopped,
    DurationElapsed,
    SurfaceLost,
}

/// Result of a finished session, handed to the page alongside the recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub variant: VariantKind,
    pub final_score: u64,
    pub hits: u32,
    pub misses: u32,
    pub accuracy: Option<f32>,
    pub mean_reaction_ms: Option<f64>,
    pub duration_ms: f64,
    pub end_reason: EndReason,
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}
