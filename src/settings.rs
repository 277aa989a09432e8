//! Game settings
//!
//! Supplied by the embedding page as JSON. Every field is optional and falls
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Color, EngineError};

/// Which mini-game a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    /// Continuous drifting bubbles
    #[default]
    BubblePop,
    /// One active slot among a fixed grid
    TargetGrid,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::BubblePop => "bubble-pop",
            VariantKind::TargetGrid => "target-grid",
        }
    }

    /// Parse a variant name. Accepts the page's legacy game ids too.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bubble-pop" | "bubbles" | "babyleap" => Some(VariantKind::BubblePop),
            "target-grid" | "targets" | "milestones" => Some(VariantKind::TargetGrid),
            _ => None,
        }
    }
}

/// Inclusive `[min, max]` range for randomized attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<(), EngineError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 || self.min > self.max {
            return Err(EngineError::InvalidConfig(format!(
                "{name} must satisfy 0 <= min <= max (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Bubble pop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BubbleSettings {
    /// Time between spawns
    pub spawn_interval_ms: f64,
    /// Bubble radius in pixels
    pub size_range: ValueRange,
    /// Upward drift in pixels per second
    pub speed_range: ValueRange,
    pub color_palette: Vec<Color>,
    pub points_per_hit: u64,
    /// Multiplier on the radius that still counts as a hit
    pub hit_tolerance: f32,
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            spawn_interval_ms: BUBBLE_SPAWN_INTERVAL_MS,
            size_range: ValueRange::new(BUBBLE_MIN_RADIUS, BUBBLE_MAX_RADIUS),
            speed_range: ValueRange::new(BUBBLE_MIN_SPEED, BUBBLE_MAX_SPEED),
            color_palette: vec![
                Color::ACCENT,
                Color::rgb(0x1D, 0xE6, 0x9F),
                Color::rgb(0x0E, 0xA5, 0xE9),
            ],
            points_per_hit: BUBBLE_POINTS,
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl BubbleSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_interval("spawnIntervalMs", self.spawn_interval_ms)?;
        self.size_range.validate("sizeRange")?;
        self.speed_range.validate("speedRange")?;
        if self.size_range.min <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "sizeRange min must be positive".to_string(),
            ));
        }
        if self.color_palette.is_empty() {
            return Err(EngineError::InvalidConfig(
                "colorPalette must not be empty".to_string(),
            ));
        }
        validate_points(self.points_per_hit)?;
        if !(self.hit_tolerance >= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "hitTolerance must be >= 1 (got {})",
                self.hit_tolerance
            )));
        }
        Ok(())
    }
}

/// Target grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetSettings {
    /// Time before the active target moves to another slot
    pub target_interval_ms: f64,
    pub slot_count: usize,
    pub columns: usize,
    /// Spacing between cells in pixels
    pub gap: f32,
    pub points_per_hit: u64,
    pub color: Color,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            target_interval_ms: TARGET_INTERVAL_MS,
            slot_count: TARGET_SLOTS,
            columns: TARGET_COLUMNS,
            gap: TARGET_GAP,
            points_per_hit: TARGET_POINTS,
            color: Color::ACCENT,
        }
    }
}

impl TargetSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_interval("targetIntervalMs", self.target_interval_ms)?;
        if self.slot_count == 0 || self.columns == 0 {
            return Err(EngineError::InvalidConfig(
                "slotCount and columns must be positive".to_string(),
            ));
        }
        validate_points(self.points_per_hit)?;
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "gap must be non-negative (got {})",
                self.gap
            )));
        }
        Ok(())
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    /// End the session automatically after this long (None = until stopped)
    pub duration_ms: Option<f64>,
    /// Fixed RNG seed (None = seeded from the clock)
    pub seed: Option<u64>,
    pub bubbles: BubbleSettings,
    pub targets: TargetSettings,
}

impl SessionSettings {
    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let settings: SessionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(duration) = self.duration_ms {
            validate_interval("durationMs", duration)?;
        }
        self.bubbles.validate()?;
        self.targets.validate()
    }
}

fn validate_interval(name: &str, ms: f64) -> Result<(), EngineError> {
    if !ms.is_finite() || ms <= 0.0 {
        return Err(EngineError::InvalidConfig(format!(
            "{name} must be a positive number of milliseconds (got {ms})"
        )));
    }
    Ok(())
}

// Every hit must change the score
fn validate_points(points: u64) -> Result<(), EngineError> {
    if points == 0 {
        return Err(EngineError::InvalidConfig(
            "pointsPerHit must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = SessionSettings::from_json("{}").unwrap();
        assert_eq!(settings, SessionSettings::default());
        assert_eq!(settings.bubbles.points_per_hit, 10);
        assert_eq!(settings.targets.points_per_hit, 20);
        assert_eq!(settings.targets.slot_count, 9);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r##"{
            "durationMs": 30000,
            "bubbles": { "spawnIntervalMs": 1200, "colorPalette": ["#FF0000"] },
            "targets": { "slotCount": 4, "columns": 2 }
        }"##;
        let settings = SessionSettings::from_json(json).unwrap();
        assert_eq!(settings.duration_ms, Some(30000.0));
        assert_eq!(settings.bubbles.spawn_interval_ms, 1200.0);
        assert_eq!(settings.bubbles.color_palette, vec![Color::rgb(255, 0, 0)]);
        // Untouched fields keep defaults
        assert_eq!(settings.bubbles.hit_tolerance, HIT_TOLERANCE);
        assert_eq!(settings.targets.slot_count, 4);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let json = r#"{ "bubbles": { "sizeRange": { "min": 30, "max": 10 } } }"#;
        assert!(matches!(
            SessionSettings::from_json(json),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_color_and_malformed_json() {
        let json = r#"{ "bubbles": { "colorPalette": ["green"] } }"#;
        assert!(matches!(
            SessionSettings::from_json(json),
            Err(EngineError::Serialization(_))
        ));
        assert!(SessionSettings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_rejects_zero_slots_and_tolerance_below_one() {
        let mut settings = SessionSettings::default();
        settings.targets.slot_count = 0;
        assert!(settings.validate().is_err());

        let mut settings = SessionSettings::default();
        settings.bubbles.hit_tolerance = 0.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_points_per_hit() {
        let json = r#"{ "bubbles": { "pointsPerHit": 0 } }"#;
        assert!(matches!(
            SessionSettings::from_json(json),
            Err(EngineError::InvalidConfig(_))
        ));

        let json = r#"{ "targets": { "pointsPerHit": 0 } }"#;
        assert!(matches!(
            SessionSettings::from_json(json),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = SessionSettings {
            duration_ms: Some(60000.0),
            seed: Some(7),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(SessionSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!(VariantKind::from_str("babyleap"), Some(VariantKind::BubblePop));
        assert_eq!(VariantKind::from_str("Milestones"), Some(VariantKind::TargetGrid));
        assert_eq!(VariantKind::from_str("target-grid"), Some(VariantKind::TargetGrid));
        assert_eq!(VariantKind::from_str("pong"), None);
        assert_eq!(VariantKind::BubblePop.as_str(), "bubble-pop");
    }
}
