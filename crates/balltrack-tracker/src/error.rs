//! Tracker error types.

use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid camera config: {0}")]
    Config(#[from] balltrack_models::ConfigError),

    #[error("Vision error: {0}")]
    Vision(#[from] balltrack_vision::VisionError),

    #[error("Camera control error: {0}")]
    Control(#[from] balltrack_control::ControlError),

    #[error("Calibration error: {0}")]
    Calibration(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn calibration(msg: impl Into<String>) -> Self {
        Self::Calibration(msg.into())
    }

    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }
}
