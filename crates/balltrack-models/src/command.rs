//! Pan/tilt/zoom commands for the camera.

/// A single pointing command. Angle-set and zoom-set are always issued together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraCommand {
    /// Pan angle in degrees, within `[-MAX_PAN_DEGREES, MAX_PAN_DEGREES]`
    pub pan: f64,
    /// Tilt angle in degrees, within `[-MAX_TILT_DEGREES, MAX_TILT_DEGREES]`
    pub tilt: f64,
    /// Zoom level, within `[min_zoom, max_zoom]` of the active config
    pub zoom: i32,
}

impl CameraCommand {
    /// Create a new command.
    pub fn new(pan: f64, tilt: f64, zoom: i32) -> Self {
        Self { pan, tilt, zoom }
    }
}
