//! Three-way result of an orchestrated call

use crate::error::OrchestrationError;

/// Result of one logical operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call completed with a value
    Success(T),
    /// The call completed without a value
    Empty,
    /// The call failed on every allowed attempt
    Failure(OrchestrationError),
}

impl<T> Outcome<T> {
    /// Resolve a zero-or-one result
    pub fn from_optional(result: Result<Option<T>, OrchestrationError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Empty,
            Err(err) => Self::Failure(err),
        }
    }

    /// Whether the call completed with a value
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the call completed without a value
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether every allowed attempt failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transform the success value, leaving Empty and Failure untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Empty => Outcome::Empty,
            Self::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// Resolve a collected zero-or-many result; no items means Empty
    pub fn from_items(result: Result<Vec<T>, OrchestrationError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Success(items),
            Err(err) => Self::Failure(err),
        }
    }
}

impl Outcome<()> {
    /// Resolve a "did it affect anything" result
    pub fn from_affected(result: Result<bool, OrchestrationError>) -> Self {
        match result {
            Ok(true) => Self::Success(()),
            Ok(false) => Self::Empty,
            Err(err) => Self::Failure(err),
        }
    }
}
