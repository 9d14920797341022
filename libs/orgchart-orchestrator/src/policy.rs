//! Timeout and retry policies

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Default per-attempt deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Default number of additional attempts after the first
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Timeout and retry budget applied to one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicy {
    /// Deadline for each individual attempt, measured from its dispatch
    pub timeout: Duration,
    /// Additional attempts allowed after the first one fails
    pub max_retries: u32,
}

impl CallPolicy {
    /// Create a policy with the given deadline and retry budget
    pub const fn new(timeout: Duration, max_retries: u32) -> Self {
        Self {
            timeout,
            max_retries,
        }
    }

    /// Total number of attempts, first one included
    pub const fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Per-attempt deadline in whole milliseconds
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_MAX_RETRIES)
    }
}

/// The shape of an orchestrated operation
///
/// Determines how the result is resolved into an outcome and which policy
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    /// All operation kinds
    pub const ALL: [OperationKind; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Stable lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policies for every operation kind
///
/// One default policy, optionally overridden per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTable {
    default: CallPolicy,
    overrides: HashMap<OperationKind, CallPolicy>,
}

impl PolicyTable {
    /// Use the same policy for every kind
    pub fn uniform(policy: CallPolicy) -> Self {
        Self {
            default: policy,
            overrides: HashMap::new(),
        }
    }

    /// Override the policy of one kind
    pub fn with_override(mut self, kind: OperationKind, policy: CallPolicy) -> Self {
        self.overrides.insert(kind, policy);
        self
    }

    /// Policy applied to the given kind
    pub fn for_kind(&self, kind: OperationKind) -> CallPolicy {
        self.overrides.get(&kind).copied().unwrap_or(self.default)
    }

    /// Policy applied to kinds without an override
    pub fn default_policy(&self) -> CallPolicy {
        self.default
    }
}
