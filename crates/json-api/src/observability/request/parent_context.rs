//! W3C trace context from incoming headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

/// `None` unless the headers carry a valid remote span.
pub(super) fn extract(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| {
        let context = propagator.extract_with_context(&Context::new(), &Headers(headers));

        let is_remote_span = context.span().span_context().is_valid();

        is_remote_span.then_some(context)
    })
}
