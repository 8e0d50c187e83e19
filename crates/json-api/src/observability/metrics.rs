//! Prometheus HTTP metrics and the `/metrics` exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl HttpMetrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("dogop_http".to_owned()), None)?;

        let requests_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new("requests_total", "HTTP requests by method, route and status."),
                &["method", "route", "status"],
            )?,
        )?;

        let request_duration_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new("request_duration_seconds", "HTTP request latency by route.")
                    .buckets(DURATION_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let requests_in_flight = register(
            &registry,
            IntGauge::new("requests_in_flight", "HTTP requests currently being served.")?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }
}

fn register<M>(registry: &Registry, metric: M) -> Result<M, prometheus::Error>
where
    M: Collector + Clone + 'static,
{
    registry.register(Box::new(metric.clone()))?;

    Ok(metric)
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS
        .get_or_init(|| {
            HttpMetrics::build()
                .inspect_err(|source| error!("failed to build HTTP metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlight {
    gauge: Option<&'static IntGauge>,
}

impl InFlight {
    pub(super) fn start() -> Self {
        let gauge = metrics().map(|metrics| &metrics.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self { gauge }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.gauge {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status = status.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Prometheus text exposition
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    if let Ok(content_type) = HeaderValue::from_str(encoder.format_type()) {
        res.headers_mut().insert(CONTENT_TYPE, content_type);
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}
