//! Engine error types

use thiserror::Error;

/// Errors surfaced by the engine. None of them is fatal to the embedding page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Drawing surface unavailable")]
    SurfaceUnavailable,

    #[error("Draw failed: {0}")]
    Draw(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown game variant: {0}")]
    UnknownVariant(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}
