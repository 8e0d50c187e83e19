//! Structured logging, trace export and request instrumentation.

use thiserror::Error;

mod init;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;

/// Errors raised while wiring up observability.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// The OTLP span exporter could not be built.
    #[error("failed to build OTLP exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
