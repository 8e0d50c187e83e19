//! DogOp JSON API Healthcheck Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use dogop_app::{
    context::AppContext,
    health::models::{CheckResult, HealthReport},
};

use crate::{extensions::*, problem::Problem};

const OK: &str = "ok";
const UNAVAILABLE: &str = "unavailable";

/// Result of a single dependency check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckResponse {
    /// Dependency name
    pub name: String,

    /// `ok` or `unavailable`
    pub status: String,

    /// Why the check failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Time the check took
    pub duration_ms: u64,
}

impl From<CheckResult> for CheckResponse {
    fn from(check: CheckResult) -> Self {
        CheckResponse {
            status: if check.is_healthy() { OK } else { UNAVAILABLE }.to_string(),
            duration_ms: u64::try_from(check.duration.as_millis()).unwrap_or(u64::MAX),
            name: check.name,
            error: check.error,
        }
    }
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// When the checks ran
    pub timestamp: String,

    /// Individual dependency checks
    pub checks: Vec<CheckResponse>,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        HealthResponse {
            status: if report.is_healthy() { OK } else { UNAVAILABLE }.to_string(),
            timestamp: Timestamp::now().to_string(),
            checks: report.checks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Healthcheck handler
///
/// Returns 200 when the database answers, 503 otherwise.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "All checks passed"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "A dependency is unavailable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, Problem> {
    let app = depot.obtain_or_500::<Arc<AppContext>>()?;

    let report = app.health.check().await;

    if !report.is_healthy() {
        warn!("health check failed: {report:?}");

        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dogop_app::health::MockHealthService;

    use crate::test_helpers::health_service;

    use super::*;

    fn make_service(health: MockHealthService) -> Service {
        health_service(health, Router::with_path("health").get(handler))
    }

    fn report(error: Option<&str>) -> HealthReport {
        HealthReport {
            checks: vec![CheckResult {
                name: "db".to_string(),
                error: error.map(ToString::to_string),
                duration: Duration::from_millis(3),
            }],
        }
    }

    #[tokio::test]
    async fn test_healthcheck_reports_ok() -> TestResult {
        let mut health = MockHealthService::new();

        health.expect_check().once().return_once(|| report(None));

        let mut res = TestClient::get("http://example.com/health")
            .send(&make_service(health))
            .await;

        let body: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "ok");
        assert_eq!(body.checks.len(), 1);
        assert!(body.checks.iter().all(|check| check.error.is_none()));

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_unreachable_database_returns_503() -> TestResult {
        let mut health = MockHealthService::new();

        health
            .expect_check()
            .once()
            .return_once(|| report(Some("database is unreachable")));

        let mut res = TestClient::get("http://example.com/health")
            .send(&make_service(health))
            .await;

        let body: HealthResponse = res.take_json().await?;
        let check = body.checks.first();

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(body.status, "unavailable");
        assert_eq!(check.map(|c| c.name.as_str()), Some("db"));
        assert_eq!(
            check.and_then(|c| c.error.as_deref()),
            Some("database is unreachable")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_without_app_context_returns_500() -> TestResult {
        let service = Service::new(Router::with_path("health").get(handler));

        let mut res = TestClient::get("http://example.com/health")
            .send(&service)
            .await;

        let problem: Problem = serde_json::from_str(&res.take_string().await?)?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(problem.title, "internal server error");

        Ok(())
    }
}
