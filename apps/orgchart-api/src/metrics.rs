//! Prometheus metrics
//!
//! Every API operation is counted by outcome and timed end to end, retries
//! included. The registry is owned by the application state and rendered on
//! `GET /metrics` in the Prometheus text format.

use std::future::Future;
use std::time::Duration;

use orgchart_orchestrator::Outcome;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use tokio::time::Instant;

/// Per-operation request counters and latency histograms
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
}

impl Metrics {
    /// Create the metrics and register them in a fresh registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                "orgchart_requests_total",
                "Total number of API operations by outcome",
            ),
            &["operation", "outcome"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                "orgchart_request_duration_seconds",
                "Time taken to resolve an API operation, retries included",
            )
            .buckets(vec![
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["operation"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    /// Record one resolved operation
    pub fn observe<T>(&self, operation: &str, outcome: &Outcome<T>, elapsed: Duration) {
        self.requests
            .with_label_values(&[operation, outcome_label(outcome)])
            .inc();
        self.latency
            .with_label_values(&[operation])
            .observe(elapsed.as_secs_f64());
    }

    /// Await an operation and record its outcome and latency
    pub async fn track<T, Fut>(&self, operation: &str, call: Fut) -> Outcome<T>
    where
        Fut: Future<Output = Outcome<T>>,
    {
        let started = Instant::now();
        let outcome = call.await;
        self.observe(operation, &outcome, started.elapsed());
        outcome
    }

    /// Content type of the rendered exposition
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Render every registered metric in the Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

fn outcome_label<T>(outcome: &Outcome<T>) -> &'static str {
    if outcome.is_success() {
        "success"
    } else if outcome.is_empty() {
        "empty"
    } else {
        "failure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_domain::RepositoryError;
    use orgchart_orchestrator::OrchestrationError;

    fn request_line(operation: &str, outcome: &str) -> String {
        format!(r#"orgchart_requests_total{{operation="{operation}",outcome="{outcome}"}} 1"#)
    }

    #[test]
    fn test_observe_labels_by_operation_and_outcome() {
        let metrics = Metrics::new().unwrap();
        let failure = OrchestrationError::from(RepositoryError::internal("x"));

        let fast = Duration::from_millis(2);

        metrics.observe("getDepartment", &Outcome::Success(1), fast);
        metrics.observe("getDepartment", &Outcome::<i32>::Empty, fast);
        metrics.observe("deleteDepartment", &Outcome::<()>::Failure(failure), fast);

        let text = metrics.render().unwrap();
        assert!(text.contains(&request_line("getDepartment", "success")));
        assert!(text.contains(&request_line("getDepartment", "empty")));
        assert!(text.contains(&request_line("deleteDepartment", "failure")));
        assert!(text.contains(
            r#"orgchart_request_duration_seconds_count{operation="getDepartment"} 2"#
        ));
    }

    #[tokio::test]
    async fn test_track_passes_the_outcome_through() {
        let metrics = Metrics::new().unwrap();

        let outcome = metrics
            .track("saveDepartment", async { Outcome::Success(7) })
            .await;

        assert_eq!(outcome, Outcome::Success(7));
        let text = metrics.render().unwrap();
        assert!(text.contains(&request_line("saveDepartment", "success")));
    }

    #[test]
    fn test_content_type_is_prometheus_text() {
        let metrics = Metrics::new().unwrap();

        assert!(metrics.content_type().starts_with("text/plain"));
    }
}
