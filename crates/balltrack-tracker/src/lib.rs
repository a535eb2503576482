//! Ball-tracking camera controller.
//!
//! This crate provides:
//! - Field position to pan/tilt/zoom mapping
//! - The confidence gate for detections
//! - The fixed-rate tracking loop with cooperative shutdown
//! - Interactive scale calibration and calibration persistence
//! - Structured logging and Prometheus metrics

pub mod calibration;
pub mod config;
pub mod decision;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod metrics;
pub mod store;
pub mod tracking_loop;

pub use calibration::{CalibrationCommand, CalibrationSession};
pub use config::{RunMode, TrackerConfig};
pub use decision::{should_track, CONFIDENCE_THRESHOLD};
pub use error::{TrackerError, TrackerResult};
pub use logging::TrackingLogger;
pub use store::ConfigStore;
pub use tracking_loop::{TickOutcome, TrackingLoop};
