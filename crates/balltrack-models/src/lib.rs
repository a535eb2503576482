//! Shared data models for the BallTrack camera controller.
//!
//! This crate provides Serde-serializable types for:
//! - Camera geometry and zoom configuration
//! - Ball detections reported by the vision feed
//! - Pan/tilt/zoom commands sent to the camera
//! - Fixed hardware limits of the gimbal

pub mod camera_config;
pub mod command;
pub mod detection;
pub mod error;
pub mod hardware;

// Re-export common types
pub use camera_config::CameraConfig;
pub use command::CameraCommand;
pub use detection::Detection;
pub use error::{ConfigError, ConfigResult};
pub use hardware::{MAX_PAN_DEGREES, MAX_TILT_DEGREES};
