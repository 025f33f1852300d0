//! Prometheus metrics for proxy traffic and upstream latency.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Proxy requests counter metric name.
pub const METRIC_PROXY_REQUESTS: &str = "proxy_requests_total";
/// Upstream errors counter metric name.
pub const METRIC_UPSTREAM_ERRORS: &str = "upstream_errors_total";
/// Upstream request latency metric name.
pub const METRIC_UPSTREAM_LATENCY: &str = "upstream_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_PROXY_REQUESTS,
        "Total number of proxied requests per endpoint"
    );
    describe_counter!(
        METRIC_UPSTREAM_ERRORS,
        "Total number of upstream failures per endpoint"
    );
    describe_histogram!(
        METRIC_UPSTREAM_LATENCY,
        "Upstream request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment the proxied request counter for an endpoint.
pub fn inc_proxy_requests(endpoint: &str) {
    counter!(METRIC_PROXY_REQUESTS, "endpoint" => endpoint.to_string()).increment(1);
}

/// Increment the upstream error counter for an endpoint.
pub fn inc_upstream_errors(endpoint: &str) {
    counter!(METRIC_UPSTREAM_ERRORS, "endpoint" => endpoint.to_string()).increment(1);
}

/// Record upstream request latency for an endpoint.
pub fn record_upstream_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_UPSTREAM_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}
