//! SSL-Vision detection intake.
//!
//! This crate provides:
//! - The `DetectionSource` seam the tracking loop pulls from
//! - SSL-Vision detection frame messages (protobuf)
//! - A UDP receiver that yields the most confident ball per frame

pub mod error;
pub mod receiver;
pub mod source;
pub mod ssl;

pub use error::{VisionError, VisionResult};
pub use receiver::{ReceiverConfig, SslVisionReceiver, DEFAULT_VISION_PORT, MAX_DATAGRAM_SIZE};
pub use source::DetectionSource;
pub use ssl::{best_ball, decode_detection, SslDetectionBall, SslDetectionFrame};
