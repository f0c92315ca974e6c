//! Error types for host-side operations.
//!
//! The snap engines themselves never fail; an unmet precondition (no artboard,
//! nothing to align to) is a no-op. These errors cover scene loading, object
//! insertion, drag bookkeeping and configuration.

use thiserror::Error;

/// Errors raised by the surface, coordinator and configuration layers.
#[derive(Debug, Error)]
pub enum SnapboardError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),
    #[error("Object cannot be dragged: {0}")]
    NotDraggable(String),
    #[error("Duplicate object id: {0}")]
    DuplicateId(String),
    #[error("Reserved object id: {0}")]
    ReservedId(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for fallible Snapboard operations.
pub type SnapboardResult<T> = Result<T, SnapboardError>;
