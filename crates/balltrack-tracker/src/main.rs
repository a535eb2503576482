//! Ball-tracking camera controller binary.
//!
//! `balltrack` follows the ball; `balltrack --calibrate` opens the
//! interactive scale calibration prompt instead.

use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use balltrack_control::{CameraControl, ObsbotOscClient};
use balltrack_models::CameraConfig;
use balltrack_tracker::{
    metrics, CalibrationSession, ConfigStore, RunMode, TrackerConfig, TrackerError,
    TrackerResult, TrackingLogger, TrackingLoop,
};
use balltrack_vision::SslVisionReceiver;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("balltrack=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let mode = RunMode::from_args(std::env::args().skip(1));
    info!("Starting balltrack in {} mode", mode.as_str());

    // Load configuration
    let config = TrackerConfig::from_env();
    info!("Tracker config: {:?}", config);

    let store = ConfigStore::new(&config.config_path);
    let camera_config = match store.load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load calibration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match mode {
        RunMode::Calibrate => {
            let logger =
                TrackingLogger::new(config.camera.camera_addr, RunMode::Calibrate.as_str());
            run_calibration(camera_config, store, logger).await
        }
        RunMode::Track => run_tracking(config, camera_config).await,
    };

    if let Err(e) = result {
        error!("balltrack error: {}", e);
        std::process::exit(1);
    }

    info!("balltrack shutdown complete");
}

async fn run_calibration(
    camera_config: CameraConfig,
    store: ConfigStore,
    logger: TrackingLogger,
) -> TrackerResult<()> {
    let mut session = CalibrationSession::new(camera_config, store).with_logger(logger);

    // The prompt blocks on stdin
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        session.run(stdin.lock(), std::io::stdout())
    })
    .await
    .map_err(|e| TrackerError::calibration(e.to_string()))?
}

async fn run_tracking(config: TrackerConfig, camera_config: CameraConfig) -> TrackerResult<()> {
    if let Some(addr) = config.metrics_addr {
        metrics::init_metrics(addr)?;
        info!("Serving Prometheus metrics on {}", addr);
    }

    let receiver = SslVisionReceiver::bind(config.vision.clone()).await?;
    let camera = ObsbotOscClient::bind(config.camera.clone()).await?;

    if let Err(e) = camera.connect().await {
        warn!("Camera initialization failed, continuing: {}", e);
    }

    // Setup signal handler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal");
                shutdown_tx.send(true).ok();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    let logger = TrackingLogger::new(config.camera.camera_addr, RunMode::Track.as_str());
    let mut tracker = TrackingLoop::new(receiver, camera, camera_config)
        .with_tick_period(config.tick_period)
        .with_logger(logger);

    tracker.run(shutdown_rx).await;
    Ok(())
}
