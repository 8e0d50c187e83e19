//! DogOp JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use dogop_app::context::AppContext;

use crate::{
    config::ServerConfig,
    observability::{Observability, request_logging},
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod greeting;
mod healthcheck;
mod observability;
mod offers;
mod problem;
mod quotes;
mod router;
mod shutdown;
#[cfg(test)]
mod test_helpers;

/// DogOp JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report this"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let addr = config.socket_addr();

    let app = match AppContext::from_settings(&config.database.app_settings()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            observability.shutdown();
            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(Arc::new(app)))
        .push(router::app_router());

    let doc = OpenApi::new("DogOp API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;
    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    info!("server stopped");

    observability.shutdown();
}
