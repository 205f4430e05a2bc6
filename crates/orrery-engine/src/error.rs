//! Error types shared by the engine, the web bridge and games.

use thiserror::Error;

/// Result type for fallible engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced while loading configuration or asset tables.
///
/// Per-frame work (orbit stepping, zoom, tessellation) never fails.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown texture: {0}")]
    UnknownTexture(String),
}
