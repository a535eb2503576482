//! Prometheus metrics for the tracking loop.

use std::net::SocketAddr;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::{TrackerError, TrackerResult};
use crate::tracking_loop::TickOutcome;

/// Install the Prometheus recorder with an HTTP listener.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> TrackerResult<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| TrackerError::metrics(e.to_string()))
}

/// Metric names as constants for consistency.
pub mod names {
    pub const DETECTIONS_TOTAL: &str = "balltrack_detections_total";
    pub const COMMANDS_DISPATCHED_TOTAL: &str = "balltrack_commands_dispatched_total";
    pub const DISPATCH_FAILURES_TOTAL: &str = "balltrack_dispatch_failures_total";
    pub const TICK_DURATION_SECONDS: &str = "balltrack_tick_duration_seconds";
}

/// Record what one tick did.
pub fn record_tick_outcome(outcome: &TickOutcome) {
    counter!(names::DETECTIONS_TOTAL, "outcome" => outcome.label()).increment(1);

    match outcome {
        TickOutcome::Dispatched(_) => {
            counter!(names::COMMANDS_DISPATCHED_TOTAL).increment(1);
        }
        TickOutcome::DispatchFailed(_) => {
            counter!(names::DISPATCH_FAILURES_TOTAL).increment(1);
        }
        TickOutcome::NoDetection | TickOutcome::Rejected { .. } => {}
    }
}

/// Record how long one tick took, excluding the inter-tick sleep.
pub fn record_tick_duration(duration_secs: f64) {
    histogram!(names::TICK_DURATION_SECONDS).record(duration_secs);
}
