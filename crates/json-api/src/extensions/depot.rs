//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;

use crate::problem::Problem;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Problem>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Problem> {
        self.obtain::<T>().map_err(|_missing| {
            error!("{} missing from depot", std::any::type_name::<T>());

            Problem::internal_server_error()
        })
    }
}
