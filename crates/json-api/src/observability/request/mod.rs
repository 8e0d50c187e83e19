//! Per-request span, request id, access log and metrics.

mod parent_context;
mod request_ids;
mod spans;

use std::time::Instant;

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, info_span, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

const UNINSTRUMENTED_PATHS: &[&str] = &["/metrics"];

fn request_span(method: &str, path: &str, route: &str, request_id: &str, req: &Request) -> Span {
    info_span!(
        parent: None,
        "http.request",
        otel.name = %format!("{method} {route}"),
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Tags every request with an id, wraps it in a span and records the outcome.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if UNINSTRUMENTED_PATHS.contains(&req.uri().path()) {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let settings = settings::current();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    request_ids::echo_request_id(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = spans::route_label(&path);
    let span = request_span(&method, &path, route, &request_id, req);

    if settings.propagate_parent_context
        && let Some(parent) = parent_context::extract(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("failed to attach remote parent to request span: {source}");
    }

    let in_flight = metrics::InFlight::start();

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    drop(in_flight);

    let elapsed = started.elapsed();
    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = elapsed.as_millis();

    metrics::observe_request(&method, route, status.as_u16(), elapsed.as_secs_f64());

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        if status.is_server_error() {
            error!(status = status.as_u16(), duration_ms, "request failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request rejected");
        } else {
            info!(status = status.as_u16(), duration_ms, "request completed");
        }

        if elapsed > settings.slow_request_threshold {
            warn!(
                duration_ms,
                threshold_ms = settings.slow_request_threshold.as_millis(),
                "slow request"
            );
        }
    });
}
