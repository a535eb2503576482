//! Confidence gate for incoming detections.

use balltrack_models::Detection;

/// Detections must be strictly above this confidence to move the camera.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Whether a detection is trusted enough to act on.
pub fn should_track(detection: &Detection) -> bool {
    detection.confidence > CONFIDENCE_THRESHOLD
}
