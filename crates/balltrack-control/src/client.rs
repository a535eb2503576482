//! UDP client for the OBSBOT OSC controller.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use balltrack_models::CameraCommand;
use rosc::OscMessage;
use tokio::net::UdpSocket;
use tracing::{debug, info};

use crate::control::CameraControl;
use crate::error::ControlResult;
use crate::messages;

/// Default OSC port of the OBSBOT controller.
pub const DEFAULT_CAMERA_PORT: u16 = 8000;

/// OSC client configuration.
#[derive(Debug, Clone)]
pub struct OscConfig {
    /// Where the OBSBOT controller listens
    pub camera_addr: SocketAddr,
    /// Device index passed to SelectDevice (first device by default)
    pub device_index: i32,
    /// Wait after resetting the gimbal before sending commands
    pub settle_delay: Duration,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            camera_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_CAMERA_PORT)),
            device_index: 0,
            settle_delay: Duration::from_secs(2),
        }
    }
}

impl OscConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            camera_addr: std::env::var("BALLTRACK_CAMERA_ADDR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.camera_addr),
            device_index: std::env::var("BALLTRACK_CAMERA_DEVICE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.device_index),
            settle_delay: Duration::from_millis(
                std::env::var("BALLTRACK_CAMERA_SETTLE_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            ),
        }
    }
}

/// Sends OSC datagrams to the OBSBOT controller without waiting for replies.
pub struct ObsbotOscClient {
    socket: UdpSocket,
    config: OscConfig,
}

impl ObsbotOscClient {
    /// Bind an ephemeral local socket of the camera address's family.
    pub async fn bind(config: OscConfig) -> ControlResult<Self> {
        let local: SocketAddr = if config.camera_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(local).await?;

        info!("OSC client sending to {}", config.camera_addr);
        Ok(Self { socket, config })
    }

    async fn send(&self, msg: OscMessage) -> ControlResult<()> {
        debug!(addr = %msg.addr, args = ?msg.args, "Sending OSC message");
        let bytes = messages::encode(msg)?;
        self.socket.send_to(&bytes, self.config.camera_addr).await?;
        Ok(())
    }
}

#[async_trait]
impl CameraControl for ObsbotOscClient {
    async fn connect(&self) -> ControlResult<()> {
        for msg in messages::connect_sequence(self.config.device_index) {
            self.send(msg).await?;
        }

        info!(
            "Camera initialized, waiting {:?} for the gimbal to settle",
            self.config.settle_delay
        );
        tokio::time::sleep(self.config.settle_delay).await;
        Ok(())
    }

    async fn set_orientation_and_zoom(&self, command: CameraCommand) -> ControlResult<()> {
        let [gimbal, zoom] = messages::orientation_and_zoom(command);
        // Always attempt both halves of the command
        let gimbal_result = self.send(gimbal).await;
        let zoom_result = self.send(zoom).await;
        gimbal_result.and(zoom_result)
    }

    async fn notify_disconnected(&self) -> ControlResult<()> {
        self.send(messages::disconnected()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::address;
    use rosc::{decoder, OscPacket, OscType};

    async fn listener() -> (UdpSocket, OscConfig) {
        let listener = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let config = OscConfig {
            camera_addr: listener.local_addr().unwrap(),
            device_index: 0,
            settle_delay: Duration::ZERO,
        };
        (listener, config)
    }

    async fn recv_message(listener: &UdpSocket) -> OscMessage {
        let mut buf = [0u8; 1024];
        let len = tokio::time::timeout(Duration::from_secs(1), listener.recv(&mut buf))
            .await
            .expect("timed out waiting for OSC datagram")
            .unwrap();
        match decoder::decode_udp(&buf[..len]).unwrap().1 {
            OscPacket::Message(msg) => msg,
            OscPacket::Bundle(_) => panic!("unexpected bundle"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = OscConfig::default();
        assert_eq!(config.camera_addr.port(), DEFAULT_CAMERA_PORT);
        assert_eq!(config.device_index, 0);
        assert_eq!(config.settle_delay, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_set_orientation_and_zoom_sends_both_messages() {
        let (listener, config) = listener().await;
        let client = ObsbotOscClient::bind(config).await.unwrap();

        client
            .set_orientation_and_zoom(CameraCommand::new(129.0, -3.5, 50))
            .await
            .unwrap();

        let gimbal = recv_message(&listener).await;
        assert_eq!(gimbal.addr, address::SET_GIMBAL_DEGREE);
        assert_eq!(
            gimbal.args,
            vec![OscType::Int(90), OscType::Int(129), OscType::Int(-3)]
        );

        let zoom = recv_message(&listener).await;
        assert_eq!(zoom.addr, address::SET_ZOOM);
        assert_eq!(zoom.args, vec![OscType::Int(50)]);
    }

    #[tokio::test]
    async fn test_connect_and_disconnect() {
        let (listener, config) = listener().await;
        let client = ObsbotOscClient::bind(config).await.unwrap();

        tokio_test::assert_ok!(client.connect().await);
        assert_eq!(recv_message(&listener).await.addr, address::CONNECTED);
        assert_eq!(recv_message(&listener).await.addr, address::SELECT_DEVICE);
        assert_eq!(recv_message(&listener).await.addr, address::RESET_GIMBAL);

        tokio_test::assert_ok!(client.notify_disconnected().await);
        let msg = recv_message(&listener).await;
        assert_eq!(msg.addr, address::DISCONNECTED);
        assert_eq!(msg.args, vec![OscType::Int(1)]);
    }
}
