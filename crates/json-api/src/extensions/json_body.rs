//! JSON request body decoding.

use salvo::Request;
use serde::de::DeserializeOwned;

use crate::problem::Problem;

const INVALID_BODY: &str = "invalid request body";

/// Decode a JSON request body, turning any failure into a 400 problem.
///
/// The `Content-Type` header is not checked, so clients that omit it are
/// still served.
pub(crate) trait JsonBodyExt {
    async fn json_body_or_400<T: DeserializeOwned>(&mut self) -> Result<T, Problem>;
}

impl JsonBodyExt for Request {
    async fn json_body_or_400<T: DeserializeOwned>(&mut self) -> Result<T, Problem> {
        let payload = self
            .payload()
            .await
            .map_err(|source| Problem::bad_request(INVALID_BODY).with_detail(source.to_string()))?;

        serde_json::from_slice(payload)
            .map_err(|source| Problem::bad_request(INVALID_BODY).with_detail(source.to_string()))
    }
}
