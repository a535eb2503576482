//! Camera geometry and zoom configuration.
//!
//! Field coordinates are millimeters with the origin at the field center.
//! The persisted form is a flat record whose keys are the field names below;
//! a partial record fills the missing keys from [`CameraConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Geometry and zoom parameters for the ball-tracking camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    // === Field ===
    /// Field width in mm (default: 6000)
    pub field_width: f64,

    /// Field height in mm (default: 4000)
    pub field_height: f64,

    // === Calibration ===
    /// Pan response multiplier (default: 1.0)
    pub pan_scale: f64,

    /// Tilt response multiplier (default: 1.0)
    pub tilt_scale: f64,

    // === Zoom ===
    /// Widest zoom level (default: 0)
    pub min_zoom: i32,

    /// Closest zoom level (default: 100)
    pub max_zoom: i32,

    /// At or below this distance from center the camera zooms fully in (default: 1000)
    pub min_distance: f64,

    /// At or beyond this distance from center the camera zooms fully out (default: 5000)
    pub max_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_width: 6000.0,
            field_height: 4000.0,

            pan_scale: 1.0,
            tilt_scale: 1.0,

            min_zoom: 0,
            max_zoom: 100,
            min_distance: 1000.0,
            max_distance: 5000.0,
        }
    }
}

impl CameraConfig {
    /// Builder: set the field extent in mm.
    pub fn with_field_size(mut self, width: f64, height: f64) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Builder: set the pan/tilt scale factors.
    pub fn with_scales(mut self, pan: f64, tilt: f64) -> Self {
        self.pan_scale = pan;
        self.tilt_scale = tilt;
        self
    }

    /// Builder: set the zoom level range.
    pub fn with_zoom_range(mut self, min: i32, max: i32) -> Self {
        self.min_zoom = min;
        self.max_zoom = max;
        self
    }

    /// Builder: set the zoom distance thresholds.
    pub fn with_distance_range(mut self, min: f64, max: f64) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Check every invariant the geometric mapping relies on.
    ///
    /// The mapping itself never re-checks, so any config that reaches the
    /// tracking loop must have passed through here.
    pub fn validate(&self) -> ConfigResult<()> {
        require_positive("field_width", self.field_width)?;
        require_positive("field_height", self.field_height)?;
        require_positive("pan_scale", self.pan_scale)?;
        require_positive("tilt_scale", self.tilt_scale)?;
        require_positive("min_distance", self.min_distance)?;
        require_positive("max_distance", self.max_distance)?;

        if self.min_zoom < 0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRange {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }

        if self.min_distance >= self.max_distance {
            return Err(ConfigError::DistanceRange {
                min_distance: self.min_distance,
                max_distance: self.max_distance,
            });
        }

        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::non_positive(field, value))
    }
}
