//! Vision intake error types.

use thiserror::Error;

pub type VisionResult<T> = Result<T, VisionError>;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed detection frame: {0}")]
    Decode(#[from] prost::DecodeError),
}
