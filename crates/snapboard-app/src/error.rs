use snapboard_core::SnapboardError;
use thiserror::Error;

/// Errors raised while loading or replaying a scenario.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Scene error: {0}")]
    Scene(#[from] SnapboardError),
    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
