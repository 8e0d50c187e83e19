//! Offer Errors

use salvo::http::StatusCode;
use tracing::error;

use dogop_app::{database::describe_sqlx_error, offers::OffersServiceError};

use crate::problem::Problem;

pub(crate) fn into_problem(error: OffersServiceError) -> Problem {
    match error {
        OffersServiceError::NotFound => Problem::not_found("offer not found"),
        OffersServiceError::Sql(source) => {
            error!("offer storage failed: {source}");

            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
                .with_detail(describe_sqlx_error(&source))
        }
    }
}
