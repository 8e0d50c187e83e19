//! Greeting Handler

use salvo::prelude::*;

pub(crate) const GREETING: &str = "Hello DogOp!";

/// Greeting handler
#[endpoint(tags("greeting"), summary = "Greeting")]
pub(crate) async fn handler() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_greeting_returns_plain_text() -> TestResult {
        let service = Service::new(Router::new().get(handler));

        let mut res = TestClient::get("http://example.com/").send(&service).await;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, GREETING);
        assert!(
            content_type.is_some_and(|value| value.starts_with("text/plain")),
            "greeting should be plain text"
        );

        Ok(())
    }
}
