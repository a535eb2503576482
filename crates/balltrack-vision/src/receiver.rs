//! UDP receiver for SSL-Vision detection frames.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use balltrack_models::Detection;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use crate::error::VisionResult;
use crate::source::DetectionSource;
use crate::ssl::decode_detection;

/// Default SSL-Vision detection port.
pub const DEFAULT_VISION_PORT: u16 = 10006;

/// Largest datagram read in one receive.
pub const MAX_DATAGRAM_SIZE: usize = 2048;

/// Receiver configuration.
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// Local address to bind
    pub bind_addr: SocketAddr,
    /// Optional IPv4 multicast group to join
    pub multicast_group: Option<Ipv4Addr>,
    /// How long a single receive may wait for a frame
    pub recv_timeout: Duration,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_VISION_PORT)),
            multicast_group: None,
            recv_timeout: Duration::from_millis(100),
        }
    }
}

impl ReceiverConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BALLTRACK_VISION_ADDR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
            multicast_group: std::env::var("BALLTRACK_VISION_MULTICAST")
                .ok()
                .and_then(|s| s.parse().ok()),
            recv_timeout: Duration::from_millis(
                std::env::var("BALLTRACK_RECV_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
            ),
        }
    }
}

/// Receives SSL-Vision frames and reduces each to its most confident ball.
pub struct SslVisionReceiver {
    socket: UdpSocket,
    config: ReceiverConfig,
    buf: Vec<u8>,
}

impl SslVisionReceiver {
    /// Bind the socket (and join the multicast group, if configured).
    pub async fn bind(config: ReceiverConfig) -> VisionResult<Self> {
        let socket = UdpSocket::bind(config.bind_addr).await?;

        if let Some(group) = config.multicast_group {
            let interface = match config.bind_addr.ip() {
                IpAddr::V4(ip) => ip,
                IpAddr::V6(_) => Ipv4Addr::UNSPECIFIED,
            };
            socket.join_multicast_v4(group, interface)?;
            info!("Joined SSL-Vision multicast group {}", group);
        }

        info!("Listening for SSL-Vision frames on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            config,
            buf: vec![0u8; MAX_DATAGRAM_SIZE],
        })
    }

    /// Address the socket is actually bound to.
    pub fn local_addr(&self) -> VisionResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Wait for a datagram, bounded by the receive timeout, then drain the
    /// socket and decode only the newest frame.
    ///
    /// `Ok(None)` covers both "nothing arrived in time" and "frame had no ball".
    async fn receive_frame(&mut self) -> VisionResult<Option<Detection>> {
        let (mut len, mut peer) =
            match tokio::time::timeout(self.config.recv_timeout, self.socket.recv_from(&mut self.buf))
                .await
            {
                Ok(result) => result?,
                Err(_) => return Ok(None),
            };

        let mut stale = 0usize;
        loop {
            match self.socket.try_recv_from(&mut self.buf) {
                Ok((n, from)) => {
                    len = n;
                    peer = from;
                    stale += 1;
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) => return Err(e.into()),
            }
        }

        debug!(bytes = len, %peer, stale, "Received SSL-Vision datagram");
        decode_detection(&self.buf[..len])
    }
}

#[async_trait]
impl DetectionSource for SslVisionReceiver {
    async fn try_receive(&mut self) -> Option<Detection> {
        match self.receive_frame().await {
            Ok(detection) => detection,
            Err(e) => {
                warn!("Error receiving SSL frame: {}", e);
                None
            }
        }
    }
}
