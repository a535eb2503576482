//! Structured session logging utilities.
//!
//! Provides consistent, structured logging for tracking and calibration
//! sessions with tracing spans and contextual information.

use balltrack_models::CameraCommand;
use tracing::{debug, error, info, warn, Span};

/// Session logger for structured logging with consistent formatting.
///
/// Every event carries the camera it drives and the run mode, so output
/// from several tracker processes can be told apart.
#[derive(Debug, Clone)]
pub struct TrackingLogger {
    camera: String,
    mode: String,
}

impl TrackingLogger {
    /// Create a new logger for a camera and run mode.
    ///
    /// # Arguments
    /// * `camera` - Label for the camera, usually its control address
    /// * `mode` - The run mode (e.g., "tracking", "calibration")
    pub fn new(camera: impl ToString, mode: &str) -> Self {
        Self {
            camera: camera.to_string(),
            mode: mode.to_string(),
        }
    }

    /// Log the start of a session.
    pub fn log_start(&self, message: &str) {
        info!(
            camera = %self.camera,
            mode = %self.mode,
            "Session started: {}", message
        );
    }

    /// Log a dispatched camera command. Emitted every tick, so debug level.
    pub fn log_command(&self, command: &CameraCommand) {
        debug!(
            camera = %self.camera,
            mode = %self.mode,
            pan = command.pan,
            tilt = command.tilt,
            zoom = command.zoom,
            "Camera command dispatched"
        );
    }

    /// Log a warning during the session.
    pub fn log_warning(&self, message: &str) {
        warn!(
            camera = %self.camera,
            mode = %self.mode,
            "Session warning: {}", message
        );
    }

    /// Log an error during the session.
    pub fn log_error(&self, message: &str) {
        error!(
            camera = %self.camera,
            mode = %self.mode,
            "Session error: {}", message
        );
    }

    /// Log the end of a session.
    pub fn log_stop(&self, message: &str) {
        info!(
            camera = %self.camera,
            mode = %self.mode,
            "Session stopped: {}", message
        );
    }

    /// Create a tracing span for this session.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "session",
            camera = %self.camera,
            mode = %self.mode
        )
    }
}
