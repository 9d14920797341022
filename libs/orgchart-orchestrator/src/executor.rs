//! Timeout + retry executor and the per-kind orchestration entry points

use std::future::Future;

use futures_util::{Stream, TryStreamExt};
use orgchart_domain::RepositoryError;
use tracing::{debug, warn};

use crate::{
    error::OrchestrationError,
    outcome::Outcome,
    policy::{CallPolicy, OperationKind, PolicyTable},
};

/// Run a call under a policy, re-dispatching it on error or timeout
///
/// `call` is invoked once per attempt and must build the operation from
/// scratch. Attempts are strictly sequential: a timed-out attempt's future is
/// dropped before the next one is created, so at most one attempt is ever in
/// flight.
///
/// # Errors
///
/// Returns `OrchestrationError::RetriesExhausted` wrapping the last attempt's
/// error once `policy.total_attempts()` attempts have failed.
pub async fn run_with_retry<T, F, Fut>(
    operation: &str,
    policy: CallPolicy,
    mut call: F,
) -> crate::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RepositoryError>>,
{
    let attempts = policy.total_attempts();
    let mut attempt = 1;

    loop {
        let error = match tokio::time::timeout(policy.timeout, call()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) => OrchestrationError::from(err),
            Err(_elapsed) => OrchestrationError::timeout(policy.timeout),
        };

        if attempt >= attempts {
            warn!(
                operation,
                attempts,
                error = %error,
                "Giving up after exhausting retries"
            );
            return Err(OrchestrationError::retries_exhausted(attempts, error));
        }

        debug!(
            operation,
            attempt,
            remaining = attempts - attempt,
            error = %error,
            "Attempt failed, retrying"
        );
        attempt += 1;
    }
}

/// Request orchestrator
///
/// Stateless apart from its policies; one instance is shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    policies: PolicyTable,
}

impl Orchestrator {
    /// Create an orchestrator with the given policies
    pub fn new(policies: PolicyTable) -> Self {
        Self { policies }
    }

    /// Collect a zero-or-many stream
    ///
    /// Every attempt consumes a fresh stream to completion under the deadline.
    /// An error anywhere in the stream fails the attempt.
    pub async fn list<T, F, S>(&self, operation: &str, call: F) -> Outcome<Vec<T>>
    where
        F: Fn() -> S,
        S: Stream<Item = Result<T, RepositoryError>>,
    {
        let policy = self.policies.for_kind(OperationKind::List);
        let result = run_with_retry(operation, policy, || call().try_collect::<Vec<T>>()).await;
        Outcome::from_items(result)
    }

    /// Resolve a zero-or-one lookup
    pub async fn get<T, F, Fut>(&self, operation: &str, call: F) -> Outcome<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, RepositoryError>>,
    {
        let policy = self.policies.for_kind(OperationKind::Get);
        Outcome::from_optional(run_with_retry(operation, policy, call).await)
    }

    /// Resolve a creation that yields the new identifier, or nothing if rejected
    pub async fn create<I, F, Fut>(&self, operation: &str, call: F) -> Outcome<I>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<I>, RepositoryError>>,
    {
        let policy = self.policies.for_kind(OperationKind::Create);
        Outcome::from_optional(run_with_retry(operation, policy, call).await)
    }

    /// Resolve an update that reports whether anything changed
    pub async fn update<F, Fut>(&self, operation: &str, call: F) -> Outcome<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool, RepositoryError>>,
    {
        let policy = self.policies.for_kind(OperationKind::Update);
        Outcome::from_affected(run_with_retry(operation, policy, call).await)
    }

    /// Resolve a delete that reports whether anything was removed
    pub async fn delete<F, Fut>(&self, operation: &str, call: F) -> Outcome<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool, RepositoryError>>,
    {
        let policy = self.policies.for_kind(OperationKind::Delete);
        Outcome::from_affected(run_with_retry(operation, policy, call).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use mockall::automock;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    #[automock]
    trait Downstream {
        fn create(&self) -> Result<Option<i64>, RepositoryError>;
        fn update(&self) -> Result<bool, RepositoryError>;
    }

    fn transient(attempt: u32) -> RepositoryError {
        RepositoryError::unavailable(format!("attempt {} refused", attempt))
    }

    #[tokio::test]
    async fn test_success_on_fifth_attempt() {
        let mut downstream = MockDownstream::new();
        let mut calls = 0;
        downstream.expect_create().times(5).returning(move || {
            calls += 1;
            if calls < 5 {
                Err(transient(calls))
            } else {
                Ok(Some(42))
            }
        });

        let outcome = Orchestrator::default()
            .create("createDepartment", || {
                let result = downstream.create();
                async move { result }
            })
            .await;

        assert_eq!(outcome, Outcome::Success(42));
    }

    #[tokio::test]
    async fn test_failure_after_five_attempts_reports_last_error() {
        let mut downstream = MockDownstream::new();
        let mut calls = 0;
        downstream.expect_update().times(5).returning(move || {
            calls += 1;
            Err(transient(calls))
        });

        let outcome = Orchestrator::default()
            .update("updateDepartment", || {
                let result = downstream.update();
                async move { result }
            })
            .await;

        match outcome {
            Outcome::Failure(err) => {
                assert_eq!(err.to_string(), "Storage unavailable: attempt 5 refused");
                assert_eq!(err.attempts(), 5);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_is_not_retried() {
        let mut downstream = MockDownstream::new();
        downstream.expect_create().times(1).returning(|| Ok(None));

        let outcome = Orchestrator::default()
            .create("createEmployee", || {
                let result = downstream.create();
                async move { result }
            })
            .await;

        assert_eq!(outcome, Outcome::Empty);
    }

    #[tokio::test]
    async fn test_false_is_empty_and_not_retried() {
        let mut downstream = MockDownstream::new();
        downstream.expect_update().times(1).returning(|| Ok(false));

        let orchestrator = Orchestrator::default();
        let outcome = orchestrator
            .delete("deleteEmployee", || {
                let result = downstream.update();
                async move { result }
            })
            .await;

        assert_eq!(outcome, Outcome::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_on_every_attempt_is_bounded() {
        let dispatched = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let outcome = Orchestrator::default()
            .get("getDepartment", || {
                let dispatched = dispatched.clone();
                async move {
                    dispatched.fetch_add(1, Ordering::SeqCst);
                    sleep(Duration::from_secs(60)).await;
                    Ok(Some("late"))
                }
            })
            .await;

        let elapsed = start.elapsed();
        assert_eq!(dispatched.load(Ordering::SeqCst), 5);
        assert!(elapsed >= Duration::from_millis(5000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(5100), "{elapsed:?}");
        match outcome {
            Outcome::Failure(err) => {
                assert!(err.is_timeout());
                assert_eq!(err.to_string(), "Operation timed out after 1000ms");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_first_attempt_then_success() {
        let dispatched = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let outcome = Orchestrator::default()
            .get("getEmployee", || {
                let attempt = dispatched.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt == 1 {
                        sleep(Duration::from_secs(3)).await;
                    }
                    Ok(Some(attempt))
                }
            })
            .await;

        let elapsed = start.elapsed();
        assert_eq!(outcome, Outcome::Success(2));
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1100), "{elapsed:?}");
    }

    struct InFlight(Arc<AtomicUsize>);

    impl Drop for InFlight {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_attempt_is_dropped_before_retry() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let outcome = Orchestrator::default()
            .update("updateEmployee", || {
                let in_flight = in_flight.clone();
                let max_seen = max_seen.clone();
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    max_seen.fetch_max(now, Ordering::SeqCst);
                    let _guard = InFlight(in_flight);
                    sleep(Duration::from_secs(10)).await;
                    Ok(true)
                }
            })
            .await;

        assert!(outcome.is_failure());
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_collects_in_order() {
        let outcome = Orchestrator::default()
            .list("getDepartments", || stream::iter(vec![Ok(1), Ok(2), Ok(3)]))
            .await;

        assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_list_of_nothing_is_empty() {
        let outcome = Orchestrator::default()
            .list("getEmployees", || stream::iter(Vec::<Result<i32, RepositoryError>>::new()))
            .await;

        assert_eq!(outcome, Outcome::Empty);
    }

    #[tokio::test]
    async fn test_list_error_mid_stream_retries_whole_stream() {
        let dispatched = AtomicU32::new(0);

        let outcome = Orchestrator::default()
            .list("getEmployeesByDept", || {
                let attempt = dispatched.fetch_add(1, Ordering::SeqCst) + 1;
                let items = if attempt < 3 {
                    vec![Ok(1), Err(transient(attempt)), Ok(3)]
                } else {
                    vec![Ok(1), Ok(2), Ok(3)]
                };
                stream::iter(items)
            })
            .await;

        assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
        assert_eq!(dispatched.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_per_kind_override_limits_attempts() {
        let policies = PolicyTable::default().with_override(
            OperationKind::Delete,
            CallPolicy::new(Duration::from_millis(1000), 0),
        );
        let mut downstream = MockDownstream::new();
        downstream
            .expect_update()
            .times(1)
            .returning(|| Err(RepositoryError::query_failed("locked")));

        let outcome = Orchestrator::new(policies)
            .delete("deleteDepartment", || {
                let result = downstream.update();
                async move { result }
            })
            .await;

        match outcome {
            Outcome::Failure(err) => {
                assert_eq!(err.attempts(), 1);
                assert_eq!(err.to_string(), "Query failed: locked");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
