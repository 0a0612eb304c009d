//! # Metrics Collection Module
//!
//! Prometheus export of pipeline metrics.
//!
//! ## Metrics Tracked
//!
//! **Counters:**
//! - `infraquery_queries_total{outcome}` - Questions handled (`answered`, `analysis_failed`)
//! - `infraquery_analysis_failures_total` - Questions the analyzer could not parse
//! - `infraquery_routing_results_total{resource_type, result}` - Lookup outcomes
//!   (`found`, `not_found`, `error`)
//! - `infraquery_synthesis_fallbacks_total` - Answers rendered without the model
//!
//! **Histograms:**
//! - `infraquery_query_duration_seconds` - End-to-end answer time

pub mod handler;

// Re-export PrometheusBuilder for test compatibility
pub use metrics_exporter_prometheus::PrometheusBuilder;

use std::time::Instant;

/// Owns the Prometheus handle and process start time.
pub struct MetricsCollector {
    /// Service startup time for uptime calculation
    start_time: Instant,
    /// Prometheus handle for rendering metrics
    prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl MetricsCollector {
    pub fn new(
        start_time: Instant,
        prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        Self {
            start_time,
            prometheus_handle,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render metrics in Prometheus text format.
    pub fn render_metrics(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Initialize Prometheus metrics exporter with custom histogram buckets.
///
/// Buckets cover two model round trips plus directory scans: [0.1 .. 120] seconds.
pub fn setup_metrics(
) -> Result<metrics_exporter_prometheus::PrometheusHandle, Box<dyn std::error::Error>> {
    use metrics_exporter_prometheus::Matcher;

    let duration_buckets = &[0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("infraquery_query_duration_seconds".to_string()),
            duration_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}
