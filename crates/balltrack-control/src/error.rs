//! Camera control error types.

use thiserror::Error;

pub type ControlResult<T> = Result<T, ControlError>;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OSC encode failed: {0}")]
    Encode(String),
}

impl ControlError {
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
