//! Request instrumentation settings shared by every request.

use std::{sync::OnceLock, time::Duration};

use crate::config::ServerConfig;

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RequestSettings {
    pub(super) slow_request_threshold: Duration,
    pub(super) propagate_parent_context: bool,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold: DEFAULT_SLOW_REQUEST_THRESHOLD,
            propagate_parent_context: false,
        }
    }
}

impl From<&ServerConfig> for RequestSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(
                config.observability.slow_request_threshold_ms,
            ),
            propagate_parent_context: config.observability.otel_enabled,
        }
    }
}

static REQUEST_SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

/// First caller wins; later calls are ignored.
pub(super) fn install(config: &ServerConfig) {
    _ = REQUEST_SETTINGS.set(RequestSettings::from(config));
}

pub(super) fn current() -> RequestSettings {
    REQUEST_SETTINGS.get().copied().unwrap_or_default()
}
