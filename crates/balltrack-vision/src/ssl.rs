//! SSL-Vision detection frame messages.
//!
//! Hand-written `prost` mirrors of `SSL_DetectionBall` and
//! `SSL_DetectionFrame` from `messages_robocup_ssl_detection.proto`. Only the
//! fields the tracker reads are declared; robot lists (tags 6 and 7) are
//! skipped by the decoder as unknown fields.

use balltrack_models::Detection;
use prost::Message;

use crate::error::VisionResult;

/// One ball candidate in a detection frame.
#[derive(Clone, PartialEq, Message)]
pub struct SslDetectionBall {
    #[prost(float, required, tag = "1")]
    pub confidence: f32,
    #[prost(uint32, optional, tag = "2")]
    pub area: Option<u32>,
    #[prost(float, required, tag = "3")]
    pub x: f32,
    #[prost(float, required, tag = "4")]
    pub y: f32,
    #[prost(float, optional, tag = "5")]
    pub z: Option<f32>,
    #[prost(float, required, tag = "6")]
    pub pixel_x: f32,
    #[prost(float, required, tag = "7")]
    pub pixel_y: f32,
}

/// One camera frame from SSL-Vision.
#[derive(Clone, PartialEq, Message)]
pub struct SslDetectionFrame {
    #[prost(uint32, required, tag = "1")]
    pub frame_number: u32,
    #[prost(double, required, tag = "2")]
    pub t_capture: f64,
    #[prost(double, required, tag = "3")]
    pub t_sent: f64,
    #[prost(uint32, required, tag = "4")]
    pub camera_id: u32,
    #[prost(message, repeated, tag = "5")]
    pub balls: Vec<SslDetectionBall>,
}

impl SslDetectionBall {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.confidence.is_finite()
    }
}

/// Pick the most confident ball; the first one wins a tie.
///
/// Balls with a non-finite position or confidence are skipped.
pub fn best_ball(frame: &SslDetectionFrame) -> Option<&SslDetectionBall> {
    frame
        .balls
        .iter()
        .filter(|ball| ball.is_finite())
        .fold(None, |best, ball| match best {
            Some(current) if current.confidence >= ball.confidence => Some(current),
            _ => Some(ball),
        })
}

/// Decode one datagram and reduce it to the detection the tracker acts on.
///
/// Returns `Ok(None)` for a well-formed frame with no usable balls.
pub fn decode_detection(datagram: &[u8]) -> VisionResult<Option<Detection>> {
    let frame = SslDetectionFrame::decode(datagram)?;

    Ok(best_ball(&frame).map(|ball| {
        Detection::new(f64::from(ball.x), f64::from(ball.y), f64::from(ball.confidence))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, confidence: f32) -> SslDetectionBall {
        SslDetectionBall {
            confidence,
            area: Some(42),
            x,
            y,
            z: None,
            pixel_x: 320.0,
            pixel_y: 240.0,
        }
    }

    fn frame(balls: Vec<SslDetectionBall>) -> SslDetectionFrame {
        SslDetectionFrame {
            frame_number: 7,
            t_capture: 1.0,
            t_sent: 1.001,
            camera_id: 0,
            balls,
        }
    }

    #[test]
    fn test_best_ball_picks_highest_confidence() {
        let frame = frame(vec![
            ball(100.0, 0.0, 0.3),
            ball(-1500.0, 250.0, 0.95),
            ball(20.0, 20.0, 0.6),
        ]);

        let best = best_ball(&frame).unwrap();
        assert_eq!(best.x, -1500.0);
        assert_eq!(best.y, 250.0);
    }

    #[test]
    fn test_best_ball_tie_keeps_first() {
        let frame = frame(vec![ball(1.0, 0.0, 0.8), ball(2.0, 0.0, 0.8)]);
        assert_eq!(best_ball(&frame).unwrap().x, 1.0);
    }

    #[test]
    fn test_decode_detection_converts_best_ball() {
        let bytes = frame(vec![ball(10.0, 5.0, 0.4), ball(3000.0, -250.0, 0.9)]).encode_to_vec();

        let detection = decode_detection(&bytes).unwrap().unwrap();
        assert_eq!(detection.x, 3000.0);
        assert_eq!(detection.y, -250.0);
        assert!((detection.confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_decode_frame_without_balls() {
        let bytes = frame(Vec::new()).encode_to_vec();
        assert_eq!(decode_detection(&bytes).unwrap(), None);
    }

    #[test]
    fn test_non_finite_balls_are_skipped() {
        let mixed = frame(vec![
            ball(f32::NAN, 0.0, 0.9),
            ball(0.0, f32::INFINITY, 0.95),
            ball(500.0, 0.0, f32::NAN),
            ball(-250.0, 10.0, 0.6),
        ]);
        assert_eq!(best_ball(&mixed).unwrap().x, -250.0);

        let bytes = frame(vec![ball(f32::NAN, 0.0, 0.9)]).encode_to_vec();
        assert_eq!(decode_detection(&bytes).unwrap(), None);
    }

    #[test]
    fn test_decode_garbage_is_error() {
        tokio_test::assert_err!(decode_detection(&[0xff, 0xff, 0xff, 0xff]));
    }
}
