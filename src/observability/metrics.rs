//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cafe_requests_total` (counter): requests by status code
//! - `cafe_request_duration_seconds` (histogram): handler latency
//! - `cafe_results_returned` (histogram): cafés per successful response

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished `/cafe` request.
pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("cafe_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("cafe_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_results(count: usize) {
    metrics::histogram!("cafe_results_returned").record(count as f64);
}
