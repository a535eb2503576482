//! Fixed-rate tracking loop.
//!
//! Each tick pulls at most one detection, gates it on confidence, maps it to
//! a camera command and dispatches that command. Nothing is carried from one
//! tick to the next except the camera config. Every per-tick failure is
//! logged and absorbed; only the stop signal ends the loop.

use std::time::{Duration, Instant};

use balltrack_control::CameraControl;
use balltrack_models::{CameraCommand, CameraConfig, Detection};
use balltrack_vision::DetectionSource;
use tokio::sync::watch;
use tracing::Instrument;

use crate::config::{RunMode, DEFAULT_TICK_PERIOD};
use crate::decision::should_track;
use crate::logging::TrackingLogger;
use crate::mapper;
use crate::metrics;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The source had nothing this tick
    NoDetection,
    /// A detection arrived but failed the confidence gate
    Rejected { confidence: f64 },
    /// A command was handed to the camera
    Dispatched(CameraCommand),
    /// A command was computed but the camera sink reported an error
    DispatchFailed(CameraCommand),
}

impl TickOutcome {
    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoDetection => "none",
            Self::Rejected { .. } => "rejected",
            Self::Dispatched(_) => "dispatched",
            Self::DispatchFailed(_) => "dispatch_failed",
        }
    }
}

/// Drives the camera from a detection source at a fixed cadence.
pub struct TrackingLoop<S, C> {
    source: S,
    control: C,
    config: CameraConfig,
    tick_period: Duration,
    logger: TrackingLogger,
}

impl<S, C> TrackingLoop<S, C>
where
    S: DetectionSource,
    C: CameraControl,
{
    /// Create a new loop. `config` must already be validated.
    pub fn new(source: S, control: C, config: CameraConfig) -> Self {
        Self {
            source,
            control,
            config,
            tick_period: DEFAULT_TICK_PERIOD,
            logger: TrackingLogger::new("camera", RunMode::Track.as_str()),
        }
    }

    /// Builder: set the sleep between ticks.
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Builder: set the session logger.
    pub fn with_logger(mut self, logger: TrackingLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Get the camera sink.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Run one tick without sleeping.
    pub async fn tick(&mut self) -> TickOutcome {
        let detection = self.source.try_receive().await;
        self.act_on(detection).await
    }

    /// Run until `shutdown` carries `true`, then notify the camera once.
    ///
    /// The stop signal interrupts the receive wait and the inter-tick sleep,
    /// never a dispatch in progress.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let span = self.logger.create_span();
        async {
            self.logger.log_start("Starting ball tracking");

            loop {
                let started = Instant::now();

                let detection = tokio::select! {
                    biased;
                    _ = stop_requested(&mut shutdown) => break,
                    detection = self.source.try_receive() => detection,
                };

                let outcome = self.act_on(detection).await;
                metrics::record_tick_outcome(&outcome);
                metrics::record_tick_duration(started.elapsed().as_secs_f64());

                tokio::select! {
                    biased;
                    _ = stop_requested(&mut shutdown) => break,
                    _ = tokio::time::sleep(self.tick_period) => {}
                }
            }

            self.logger.log_stop("Stopping ball tracking");
            if let Err(e) = self.control.notify_disconnected().await {
                self.logger
                    .log_error(&format!("Failed to notify camera of disconnect: {}", e));
            }
        }
        .instrument(span)
        .await
    }

    async fn act_on(&mut self, detection: Option<Detection>) -> TickOutcome {
        let Some(detection) = detection else {
            return TickOutcome::NoDetection;
        };

        if !should_track(&detection) {
            return TickOutcome::Rejected {
                confidence: detection.confidence,
            };
        }

        let (x, y) = detection.position();
        let command = mapper::command(x, y, &self.config);

        match self.control.set_orientation_and_zoom(command).await {
            Ok(()) => {
                self.logger.log_command(&command);
                TickOutcome::Dispatched(command)
            }
            Err(e) => {
                self.logger
                    .log_warning(&format!("Failed to dispatch camera command: {}", e));
                TickOutcome::DispatchFailed(command)
            }
        }
    }
}

/// Resolves once a stop has been requested.
///
/// If the sender is dropped no stop can ever arrive, so this never resolves.
async fn stop_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
