//! App Context

use std::{sync::Arc, time::Duration};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        health::{HealthService, PgHealthService},
        offers::{OffersService, PgOffersService},
    },
};

/// Startup failures.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The pool could not open a connection.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// A migration failed or the migration history is inconsistent.
    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

/// Everything needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// `PostgreSQL` connection string
    pub database_url: String,

    /// Pool sizing
    pub pool: PoolSettings,

    /// Upper bound on a single health probe
    pub health_check_timeout: Duration,
}

/// Services shared by every request, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    /// Offer store
    pub offers: Arc<dyn OffersService>,

    /// Dependency health checks
    pub health: Arc<dyn HealthService>,
}

impl AppContext {
    /// Build application context from a database URL, migrating the schema first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_settings(settings: &AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url, &settings.pool)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("database schema is up to date");

        let db = Db::new(pool);

        Ok(Self {
            offers: Arc::new(PgOffersService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db, settings.health_check_timeout)),
        })
    }
}
