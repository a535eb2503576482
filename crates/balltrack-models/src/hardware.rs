//! Fixed gimbal travel of the PTZ camera.
//!
//! Physical limits of the gimbal; they are not part of
//! [`CameraConfig`](crate::CameraConfig).

/// Maximum pan travel in either direction, in degrees.
pub const MAX_PAN_DEGREES: f64 = 129.0;

/// Maximum tilt travel in either direction, in degrees.
pub const MAX_TILT_DEGREES: f64 = 59.0;
