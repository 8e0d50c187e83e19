//! Database connection management

use std::time::Duration;

use sqlx::{
    Error, PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    postgres::PgPoolOptions,
    query,
};

/// Forward-only schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const PING_SQL: &str = "SELECT 1";

/// Pool sizing for [`connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Upper bound on concurrently open connections.
    pub max_connections: u32,

    /// How long a caller waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Cloneable handle on the shared connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Wrap an open pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction on a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, Error> {
        self.pool.begin().await
    }

    /// Round-trip a trivial query to prove the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the query cannot be executed.
    pub async fn ping(&self) -> Result<(), Error> {
        query(PING_SQL).execute(&self.pool).await?;

        Ok(())
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<PgPool, Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
}

/// Apply pending migrations. Already applied migrations are skipped.
///
/// # Errors
///
/// Returns an error when a migration fails or the history is inconsistent.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// A short description of a storage failure that is safe to show to clients.
///
/// Driver messages can carry connection strings, hostnames or SQL; none of
/// that leaves the process.
#[must_use]
pub fn describe_sqlx_error(error: &Error) -> &'static str {
    match error {
        Error::PoolTimedOut => "timed out waiting for a database connection",
        Error::PoolClosed | Error::WorkerCrashed => "database pool is shut down",
        Error::Io(_) | Error::Tls(_) => "database is unreachable",
        Error::Database(_) => "database rejected the operation",
        Error::RowNotFound => "record not found",
        Error::ColumnDecode { .. } | Error::ColumnNotFound(_) | Error::Decode(_) => {
            "stored record could not be decoded"
        }
        _ => "database operation failed",
    }
}
