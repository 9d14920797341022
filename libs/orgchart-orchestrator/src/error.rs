//! Errors produced while orchestrating a call

use std::time::Duration;

use orgchart_domain::RepositoryError;
use thiserror::Error;

/// Why an orchestrated call failed
///
/// All variants end up as the same failure response; the distinction only
/// matters for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationError {
    /// A single attempt did not complete before its deadline
    #[error("Operation timed out after {timeout_ms}ms")]
    TimeoutExceeded { timeout_ms: u64 },

    /// The data access boundary reported an error
    #[error(transparent)]
    DownstreamError(#[from] RepositoryError),

    /// Every allowed attempt failed; displays as the last attempt's error
    #[error("{last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<OrchestrationError>,
    },
}

impl OrchestrationError {
    /// Create a timeout error for the given deadline
    pub fn timeout(deadline: Duration) -> Self {
        Self::TimeoutExceeded {
            timeout_ms: u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Wrap the last attempt's error after the retry budget is spent
    pub fn retries_exhausted(attempts: u32, last: OrchestrationError) -> Self {
        Self::RetriesExhausted {
            attempts,
            last: Box::new(last),
        }
    }

    /// The error of the final attempt, unwrapping retry exhaustion
    pub fn last_error(&self) -> &OrchestrationError {
        match self {
            Self::RetriesExhausted { last, .. } => last.last_error(),
            other => other,
        }
    }

    /// Number of attempts made before giving up
    pub fn attempts(&self) -> u32 {
        match self {
            Self::RetriesExhausted { attempts, .. } => *attempts,
            _ => 1,
        }
    }

    /// Check if the final attempt timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self.last_error(), Self::TimeoutExceeded { .. })
    }
}

/// Result type alias for orchestrated calls
pub type Result<T> = std::result::Result<T, OrchestrationError>;
