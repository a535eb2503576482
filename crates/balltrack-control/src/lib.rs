//! Camera control over OSC.
//!
//! This crate provides:
//! - The `CameraControl` seam the tracking loop dispatches to
//! - OBSBOT WebCam OSC addresses and message builders
//! - A fire-and-forget UDP client for the OBSBOT controller

pub mod client;
pub mod control;
pub mod error;
pub mod messages;

pub use client::{ObsbotOscClient, OscConfig, DEFAULT_CAMERA_PORT};
pub use control::CameraControl;
pub use error::{ControlError, ControlResult};
pub use messages::GIMBAL_SPEED;
