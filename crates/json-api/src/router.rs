//! App Router

use salvo::Router;

use crate::{greeting, healthcheck, observability::metrics_handler, offers, quotes};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(greeting::handler)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("quote").post(quotes::create::handler))
                .push(
                    Router::with_path("offer")
                        .post(offers::create::handler)
                        .push(Router::with_path("{id}").get(offers::get::handler)),
                ),
        )
}
