//! Subscriber installation and telemetry lifecycle.

use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig};

use super::{ObservabilityError, otel, settings};

/// Noisy dependency targets held at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &[&str] = &["h2", "hyper", "tonic", "opentelemetry", "sqlx::query"];

/// Live telemetry handles; call [`Observability::shutdown`] before exit.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the global subscriber and, when enabled, the OTLP exporter.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::install(config);

        let tracer_provider = if config.observability.otel_enabled {
            global::set_text_map_propagator(TraceContextPropagator::new());

            Some(otel::build_tracer_provider(&config.observability)?)
        } else {
            None
        };

        match config.logging.log_format {
            LogFormat::Compact => install_subscriber(
                config,
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_line_number(true),
                tracer_provider.as_ref(),
            )?,
            LogFormat::Json => install_subscriber(
                config,
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true),
                tracer_provider.as_ref(),
            )?,
        }

        if tracer_provider.is_some() {
            info!(
                endpoint = %config.observability.otel_exporter_otlp_endpoint,
                "exporting traces over OTLP"
            );
        }

        Ok(Self { tracer_provider })
    }

    /// Flush pending spans.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to flush tracer provider: {source}");
        }
    }
}

fn default_directives(level: &str) -> String {
    QUIET_TARGETS
        .iter()
        .fold(level.to_owned(), |directives, target| {
            format!("{directives},{target}=warn")
        })
}

fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.logging.log_level)))
}

fn install_subscriber<L>(
    config: &ServerConfig,
    fmt_layer: L,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let otel_layer = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(config.observability.otel_service_name.clone()))
    });

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(config))
        .with(otel_layer)
        .try_init()?;

    Ok(())
}
