//! Request ID resolution and echoing.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuses a caller-supplied id when it is short printable ASCII, otherwise
/// mints a time-ordered UUID.
pub(super) fn resolve_request_id(supplied: Option<String>) -> String {
    supplied
        .map(|value| value.trim().to_owned())
        .filter(|value| is_acceptable(value))
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn is_acceptable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn echo_request_id(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => warn!(request_id, "request id is not a valid header value: {source}"),
    }
}
