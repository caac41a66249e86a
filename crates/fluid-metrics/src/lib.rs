use std::sync::Arc;

use opentelemetry::{KeyValue, global, metrics::Counter};

#[derive(Debug)]
pub struct MetricsRegistry {
    pub upstream: Arc<UpstreamMetrics>,
    pub proxy: Arc<ProxyMetrics>,
}

impl MetricsRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            upstream: UpstreamMetrics::new(),
            proxy: ProxyMetrics::new(),
        })
    }
}

/// Calls made by the calculator against the Fluid API.
#[derive(Debug)]
pub struct UpstreamMetrics {
    requests: Counter<u64>,
    failures: Counter<u64>,
}

impl UpstreamMetrics {
    pub fn new() -> Arc<Self> {
        let meter = global::meter("fluid-calculator");
        let requests = meter
            .u64_counter("upstream_requests_total")
            .with_description("Number of requests sent to the Fluid API")
            .with_unit("count")
            .init();

        let failures = meter
            .u64_counter("upstream_failures_total")
            .with_description("Number of Fluid API requests that failed")
            .with_unit("count")
            .init();

        Arc::new(Self { requests, failures })
    }

    pub fn record_request(&self, endpoint: &'static str) {
        self.requests.add(1, &[KeyValue::new("endpoint", endpoint)]);
    }

    pub fn record_failure(&self, endpoint: &'static str, reason: &'static str) {
        self.failures.add(
            1,
            &[
                KeyValue::new("endpoint", endpoint),
                KeyValue::new("reason", reason),
            ],
        );
    }
}

/// Requests relayed through the pass-through proxy.
#[derive(Debug)]
pub struct ProxyMetrics {
    relayed: Counter<u64>,
}

impl ProxyMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter("fluid-calculator");
        let relayed = meter
            .u64_counter("proxy_requests_total")
            .with_description("Number of requests relayed to the Fluid API")
            .with_unit("count")
            .init();

        Arc::new(Self { relayed })
    }

    pub fn record_relayed(&self, method: &str, status: u16) {
        self.relayed.add(
            1,
            &[
                KeyValue::new("method", method.to_string()),
                KeyValue::new("status", i64::from(status)),
            ],
        );
    }
}
