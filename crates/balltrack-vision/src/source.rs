//! The detection seam consumed by the tracking loop.

use async_trait::async_trait;
use balltrack_models::Detection;

/// Something that can hand the tracking loop its next ball position.
///
/// Implementations absorb their own transport and decode failures: an error
/// is logged inside the source and surfaces here as `None`, exactly like a
/// frame without a ball. A call may wait, but only for a bounded time.
#[async_trait]
pub trait DetectionSource: Send {
    /// The most confident ball from the next available frame, if any.
    async fn try_receive(&mut self) -> Option<Detection>;
}
