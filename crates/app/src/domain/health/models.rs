//! Health Models

use std::time::Duration;

/// Outcome of a single dependency probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Dependency name, e.g. `db`
    pub name: String,

    /// Client-safe failure description; `None` when healthy
    pub error: Option<String>,

    /// Time the probe took
    pub duration: Duration,
}

impl CheckResult {
    /// True when the probe succeeded.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of a full health run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthReport {
    /// One entry per probed dependency
    pub checks: Vec<CheckResult>,
}

impl HealthReport {
    /// A report is healthy when every check passed.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.checks.iter().all(CheckResult::is_healthy)
    }
}
