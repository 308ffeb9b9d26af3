//! Metrics collection and Prometheus export.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Once, OnceLock};

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

static INIT: Once = Once::new();

/// Install the Prometheus recorder.
///
/// Must run before any metric is recorded. Later and concurrent calls wait for
/// the first one and then return without reinstalling.
pub fn init_metrics() {
    INIT.call_once(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
    });
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Count an inquiry submission by outcome (`received` or `failed`).
pub fn record_inquiry(outcome: &'static str) {
    counter!("inquiries_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_the_first_recorder() {
        init_metrics();
        init_metrics();

        record_inquiry("received");

        let rendered = get_metrics();
        assert!(rendered.contains("inquiries_total"), "{rendered}");
        assert!(rendered.contains(r#"outcome="received""#), "{rendered}");
    }
}
