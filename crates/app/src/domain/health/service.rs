//! Health service.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use mockall::automock;
use tokio::time::timeout;
use tracing::warn;

use crate::{
    database::{Db, describe_sqlx_error},
    domain::health::models::{CheckResult, HealthReport},
};

const DATABASE_CHECK: &str = "db";

/// Health checks against the application database.
#[derive(Debug, Clone)]
pub struct PgHealthService {
    db: Db,
    timeout: Duration,
}

impl PgHealthService {
    /// `timeout` bounds each database probe.
    #[must_use]
    pub fn new(db: Db, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn check_database(&self) -> CheckResult {
        let started = Instant::now();

        let error = match timeout(self.timeout, self.db.ping()).await {
            Ok(Ok(())) => None,
            Ok(Err(source)) => {
                warn!("database health check failed: {source}");

                Some(describe_sqlx_error(&source).to_string())
            }
            Err(_elapsed) => {
                warn!(timeout_ms = self.timeout.as_millis(), "database health check timed out");

                Some(format!("timed out after {}ms", self.timeout.as_millis()))
            }
        };

        CheckResult {
            name: DATABASE_CHECK.to_string(),
            error,
            duration: started.elapsed(),
        }
    }
}

#[async_trait]
impl HealthService for PgHealthService {
    async fn check(&self) -> HealthReport {
        HealthReport {
            checks: vec![self.check_database().await],
        }
    }
}

/// Dependency health probes.
#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Probe every dependency the service needs to answer requests.
    async fn check(&self) -> HealthReport;
}
