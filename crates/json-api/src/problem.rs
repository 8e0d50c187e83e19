//! Problem details error bodies.

use salvo::{
    Scribe,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
    oapi::{self, Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::Response,
};
use serde::{Deserialize, Serialize};
use tracing::error;

const PROBLEM_JSON: &str = "application/problem+json";

/// Structured error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Problem {
    /// Short, stable summary of the problem type
    pub title: String,

    /// HTTP status code
    pub status: u16,

    /// Human-readable explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub(crate) fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub(crate) fn bad_request(title: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, title)
    }

    pub(crate) fn not_found(title: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, title)
    }

    pub(crate) fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    #[must_use]
    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Scribe for Problem {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());

        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(source) => {
                error!("failed to encode problem body: {source}");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

                return;
            }
        };

        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));

        if let Err(source) = res.write_body(body) {
            error!("failed to write problem body: {source}");
        }
    }
}

impl EndpointOutRegister for Problem {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Invalid request"),
            (StatusCode::NOT_FOUND, "Resource not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content(PROBLEM_JSON, Content::new(Self::to_schema(components))),
            );
        }
    }
}
