//! Offers service errors.

use sqlx::Error;
use thiserror::Error;

/// Failures returned by [`OffersService`](super::OffersService).
#[derive(Debug, Error)]
pub enum OffersServiceError {
    /// No offer has the requested identifier.
    #[error("offer not found")]
    NotFound,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OffersServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            other => Self::Sql(other),
        }
    }
}
