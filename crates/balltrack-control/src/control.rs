//! The camera seam driven by the tracking loop.

use async_trait::async_trait;
use balltrack_models::CameraCommand;

use crate::error::ControlResult;

/// A PTZ camera that accepts pointing commands.
///
/// All operations are fire-and-forget: an `Ok` means the command left the
/// process, not that the camera applied it.
#[async_trait]
pub trait CameraControl: Send + Sync {
    /// Bring the camera into a known state before tracking starts.
    async fn connect(&self) -> ControlResult<()>;

    /// Point the camera and set its zoom as one command.
    async fn set_orientation_and_zoom(&self, command: CameraCommand) -> ControlResult<()>;

    /// Tell the camera that tracking has ended.
    async fn notify_disconnected(&self) -> ControlResult<()>;
}
