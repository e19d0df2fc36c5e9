//! Metrics collection and exposition.
//!
//! # Metrics
//! - `driver_api_submissions_total` (counter): submissions by outcome
//!   (`accepted`, `rejected`, `failed`)
//! - `driver_api_store_duration_seconds` (histogram): store call latency by
//!   operation and result
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus
//! recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const SUBMISSIONS_TOTAL: &str = "driver_api_submissions_total";
pub const STORE_DURATION_SECONDS: &str = "driver_api_store_duration_seconds";

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one handled submission.
pub fn record_submission(outcome: &'static str) {
    metrics::counter!(SUBMISSIONS_TOTAL, "outcome" => outcome).increment(1);
}

/// Record the latency of one store call started at `start`.
pub fn record_store_call(operation: &'static str, start: Instant, ok: bool) {
    let result = if ok { "ok" } else { "error" };
    metrics::histogram!(
        STORE_DURATION_SECONDS,
        "operation" => operation,
        "result" => result
    )
    .record(start.elapsed().as_secs_f64());
}
