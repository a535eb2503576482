//! Tracker runtime configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use balltrack_control::OscConfig;
use balltrack_vision::ReceiverConfig;

/// Default location of the persisted camera calibration.
pub const DEFAULT_CONFIG_PATH: &str = "camera_config.json";

/// Default tracking loop period (about 60 Hz).
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(16);

/// Process-level configuration. Camera geometry lives in
/// [`CameraConfig`](balltrack_models::CameraConfig) and is persisted separately.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// SSL-Vision receiver settings
    pub vision: ReceiverConfig,
    /// OBSBOT OSC client settings
    pub camera: OscConfig,
    /// Path of the persisted camera calibration
    pub config_path: PathBuf,
    /// Sleep between tracking ticks
    pub tick_period: Duration,
    /// Prometheus listener address (exporter disabled when unset)
    pub metrics_addr: Option<SocketAddr>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            vision: ReceiverConfig::default(),
            camera: OscConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            tick_period: DEFAULT_TICK_PERIOD,
            metrics_addr: None,
        }
    }
}

impl TrackerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            vision: ReceiverConfig::from_env(),
            camera: OscConfig::from_env(),
            config_path: std::env::var("BALLTRACK_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
            tick_period: Duration::from_millis(
                std::env::var("BALLTRACK_TICK_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(16),
            ),
            metrics_addr: std::env::var("BALLTRACK_METRICS_ADDR")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}

/// The two mutually exclusive things one process invocation can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Follow the ball with the camera
    Track,
    /// Interactively tune the pan/tilt scale factors
    Calibrate,
}

impl RunMode {
    /// Pick the mode from command-line arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match args.into_iter().next() {
            Some(arg) if arg.as_ref() == "--calibrate" => Self::Calibrate,
            _ => Self::Track,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "tracking",
            Self::Calibrate => "calibration",
        }
    }
}
