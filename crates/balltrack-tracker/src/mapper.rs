//! Field position to camera pointing.
//!
//! Pure functions of a validated [`CameraConfig`]. Out-of-range input is
//! clamped, never rejected: detection noise can report the ball slightly
//! outside the nominal field.

use balltrack_models::{CameraCommand, CameraConfig, MAX_PAN_DEGREES, MAX_TILT_DEGREES};

/// Pan and tilt angles in degrees for a field position.
pub fn angles(x: f64, y: f64, config: &CameraConfig) -> (f64, f64) {
    let rel_x = x / (config.field_width / 2.0);
    let rel_y = y / (config.field_height / 2.0);

    let pan = rel_x * MAX_PAN_DEGREES * config.pan_scale;
    let tilt = rel_y * MAX_TILT_DEGREES * config.tilt_scale;

    (
        pan.max(-MAX_PAN_DEGREES).min(MAX_PAN_DEGREES),
        tilt.max(-MAX_TILT_DEGREES).min(MAX_TILT_DEGREES),
    )
}

/// Zoom level for a field position, from its distance to the field center.
///
/// Closer to center means more zoom: `max_zoom` at or inside `min_distance`,
/// `min_zoom` at or beyond `max_distance`, linear (truncated) in between.
pub fn zoom(x: f64, y: f64, config: &CameraConfig) -> i32 {
    let distance = (x * x + y * y).sqrt();

    if distance <= config.min_distance {
        return config.max_zoom;
    }
    if distance >= config.max_distance {
        return config.min_zoom;
    }

    let zoom_range = f64::from(config.max_zoom) - f64::from(config.min_zoom);
    let distance_range = config.max_distance - config.min_distance;
    let zoom = f64::from(config.max_zoom)
        - zoom_range * (distance - config.min_distance) / distance_range;

    (zoom.trunc() as i32).max(config.min_zoom).min(config.max_zoom)
}

/// Full command for a field position. Angles and zoom both use the raw position.
pub fn command(x: f64, y: f64, config: &CameraConfig) -> CameraCommand {
    let (pan, tilt) = angles(x, y, config);
    CameraCommand::new(pan, tilt, zoom(x, y, config))
}
