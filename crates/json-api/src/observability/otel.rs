//! OTLP trace export.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let resource = Resource::builder_empty()
        .with_service_name(config.otel_service_name.clone())
        .with_attributes([KeyValue::new("service.version", env!("CARGO_PKG_VERSION"))])
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(
            config.otel_exporter_otlp_timeout_seconds,
        ))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler(config.otel_trace_sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

fn sample_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() { 1.0 } else { ratio.clamp(0.0, 1.0) }
}

/// Honours an upstream sampling decision, otherwise samples by ratio.
fn sampler(ratio: f64) -> Sampler {
    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(sample_ratio(ratio))))
}
