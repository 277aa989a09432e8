//! Completed-session history
//!
//! Persisted to LocalStorage, keeps the most recent sessions (newest first).

use serde::{Deserialize, Serialize};

use crate::engine::SessionSummary;
use crate::settings::VariantKind;

/// Maximum number of sessions to keep
pub const MAX_HISTORY: usize = 20;

/// A single finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub variant: VariantKind,
    pub score: u64,
    pub hits: u32,
    pub misses: u32,
    pub mean_reaction_ms: Option<f64>,
    /// Unix timestamp (ms) when the session ended
    pub timestamp: f64,
}

impl SessionRecord {
    pub fn from_summary(summary: &SessionSummary, timestamp: f64) -> Self {
        Self {
            variant: summary.variant,
            score: summary.final_score,
            hits: summary.hits,
            misses: summary.misses,
            mean_reaction_ms: summary.mean_reaction_ms,
            timestamp,
        }
    }
}

/// Recent sessions, newest first
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionHistory {
    pub entries: Vec<SessionRecord>,
}

impl SessionHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neuroweave_play_history";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a session, dropping the oldest beyond [`MAX_HISTORY`]
    pub fn push(&mut self, record: SessionRecord) {
        self.entries.insert(0, record);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&SessionRecord> {
        self.entries.first()
    }

    /// Best score kept for a variant
    pub fn best_score(&self, variant: VariantKind) -> Option<u64> {
        self.entries
            .iter()
            .filter(|e| e.variant == variant)
            .map(|e| e.score)
            .max()
    }

    pub fn to_json(&self) -> Result<String, crate::EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(history) = serde_json::from_str::<SessionHistory>(&json) {
                    log::info!("Loaded {} past sessions", history.entries.len());
                    return history;
                }
            }
        }

        log::info!("No session history found, starting fresh");
        Self::new()
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Session history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(variant: VariantKind, score: u64, timestamp: f64) -> SessionRecord {
        SessionRecord {
            variant,
            score,
            hits: (score / 10) as u32,
            misses: 0,
            mean_reaction_ms: None,
            timestamp,
        }
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = SessionHistory::new();
        for i in 0..(MAX_HISTORY + 5) {
            history.push(record(VariantKind::BubblePop, i as u64, i as f64));
        }
        assert_eq!(history.entries.len(), MAX_HISTORY);
        assert_eq!(history.latest().unwrap().timestamp, (MAX_HISTORY + 4) as f64);
        // The five oldest were dropped
        assert_eq!(history.entries.last().unwrap().timestamp, 5.0);
    }

    #[test]
    fn test_best_score_per_variant() {
        let mut history = SessionHistory::new();
        assert_eq!(history.best_score(VariantKind::BubblePop), None);
        history.push(record(VariantKind::BubblePop, 30, 1.0));
        history.push(record(VariantKind::TargetGrid, 80, 2.0));
        history.push(record(VariantKind::BubblePop, 50, 3.0));
        assert_eq!(history.best_score(VariantKind::BubblePop), Some(50));
        assert_eq!(history.best_score(VariantKind::TargetGrid), Some(80));
    }

    #[test]
    fn test_json_round_trip() {
        let mut history = SessionHistory::new();
        history.push(record(VariantKind::TargetGrid, 40, 1.0));
        let json = history.to_json().unwrap();
        assert!(json.contains("\"variant\":\"target-grid\""));
        let back: SessionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_native_load_is_empty() {
        assert!(SessionHistory::load().is_empty());
    }
}
