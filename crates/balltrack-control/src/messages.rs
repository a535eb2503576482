//! OBSBOT WebCam OSC messages.

use balltrack_models::CameraCommand;
use rosc::{encoder, OscMessage, OscPacket, OscType};

use crate::error::{ControlError, ControlResult};

/// Gimbal motor speed sent with every orientation command.
pub const GIMBAL_SPEED: i32 = 90;

/// OSC address names as constants for consistency.
pub mod address {
    pub const CONNECTED: &str = "/OBSBOT/WebCam/General/Connected";
    pub const DISCONNECTED: &str = "/OBSBOT/WebCam/General/Disconnected";
    pub const SELECT_DEVICE: &str = "/OBSBOT/WebCam/General/SelectDevice";
    pub const RESET_GIMBAL: &str = "/OBSBOT/WebCam/General/ResetGimbal";
    pub const SET_GIMBAL_DEGREE: &str = "/OBSBOT/WebCam/General/SetGimMotorDegree";
    pub const SET_ZOOM: &str = "/OBSBOT/WebCam/General/SetZoom";
}

fn message(addr: &str, args: Vec<OscType>) -> OscMessage {
    OscMessage {
        addr: addr.to_string(),
        args,
    }
}

/// Connect, select the device, and re-home the gimbal.
pub fn connect_sequence(device_index: i32) -> Vec<OscMessage> {
    vec![
        message(address::CONNECTED, vec![OscType::Int(1)]),
        message(address::SELECT_DEVICE, vec![OscType::Int(device_index)]),
        message(address::RESET_GIMBAL, vec![OscType::Int(1)]),
    ]
}

/// Gimbal angles then zoom. Angles are truncated toward zero.
pub fn orientation_and_zoom(command: CameraCommand) -> [OscMessage; 2] {
    [
        message(
            address::SET_GIMBAL_DEGREE,
            vec![
                OscType::Int(GIMBAL_SPEED),
                OscType::Int(command.pan as i32),
                OscType::Int(command.tilt as i32),
            ],
        ),
        message(address::SET_ZOOM, vec![OscType::Int(command.zoom)]),
    ]
}

pub fn disconnected() -> OscMessage {
    message(address::DISCONNECTED, vec![OscType::Int(1)])
}

/// Encode a single message as an OSC packet.
pub fn encode(msg: OscMessage) -> ControlResult<Vec<u8>> {
    encoder::encode(&OscPacket::Message(msg)).map_err(|e| ControlError::encode(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_truncates_angles() {
        let [gimbal, zoom] = orientation_and_zoom(CameraCommand::new(-12.9, 58.7, 42));

        assert_eq!(gimbal.addr, address::SET_GIMBAL_DEGREE);
        assert_eq!(
            gimbal.args,
            vec![OscType::Int(90), OscType::Int(-12), OscType::Int(58)]
        );
        assert_eq!(zoom.addr, address::SET_ZOOM);
        assert_eq!(zoom.args, vec![OscType::Int(42)]);
    }

    #[test]
    fn test_connect_sequence_order() {
        let addrs: Vec<String> = connect_sequence(0).into_iter().map(|m| m.addr).collect();
        assert_eq!(
            addrs,
            vec![address::CONNECTED, address::SELECT_DEVICE, address::RESET_GIMBAL]
        );
    }

    #[test]
    fn test_encoded_packet_carries_address() {
        let bytes = encode(disconnected()).unwrap();
        assert!(bytes.starts_with(address::DISCONNECTED.as_bytes()));
        // OSC packets are padded to 4-byte boundaries
        assert_eq!(bytes.len() % 4, 0);
    }
}
