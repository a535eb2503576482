//! Configuration validation errors.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("zoom range is invalid: min_zoom={min_zoom}, max_zoom={max_zoom} (need 0 <= min_zoom <= max_zoom)")]
    ZoomRange { min_zoom: i32, max_zoom: i32 },

    #[error("distance range is invalid: min_distance={min_distance}, max_distance={max_distance} (need min_distance < max_distance)")]
    DistanceRange { min_distance: f64, max_distance: f64 },
}

impl ConfigError {
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }
}
