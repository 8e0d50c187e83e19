//! Route names for spans and metric labels.

/// Label for any path that does not belong to a served route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

const OFFER_ROUTE: &str = "/api/offer/{id}";
const DOCS_ROUTE: &str = "/docs";

const STATIC_ROUTES: &[&str] = &[
    "/",
    "/health",
    "/metrics",
    "/api/quote",
    "/api/offer",
    "/api-doc/openapi.json",
];

/// Maps a request path onto one of a fixed set of route labels, so client
/// supplied path segments never become label values.
pub(super) fn route_label(path: &str) -> &'static str {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if let Some(route) = STATIC_ROUTES.iter().copied().find(|route| *route == path) {
        return route;
    }

    if path
        .strip_prefix("/api/offer/")
        .is_some_and(|id| !id.contains('/'))
    {
        return OFFER_ROUTE;
    }

    if path == DOCS_ROUTE || path.starts_with("/docs/") {
        return DOCS_ROUTE;
    }

    UNMATCHED_ROUTE
}
