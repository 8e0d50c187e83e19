//! Graceful shutdown on SIGINT / SIGTERM

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    Terminate(#[source] io::Error),
}

/// Which signal stopped the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

#[cfg(unix)]
async fn terminate() -> Result<(), ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> Result<(), ShutdownSignalError> {
    std::future::pending().await
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            Ok(ShutdownSignal::Interrupt)
        }
        result = terminate() => {
            result?;

            Ok(ShutdownSignal::Terminate)
        }
    }
}

/// Stops accepting connections once a signal arrives and lets in-flight
/// requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!("{received} received, draining in-flight requests");

    handle.stop_graceful(None);

    Ok(())
}
