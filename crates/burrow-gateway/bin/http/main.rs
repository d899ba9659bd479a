mod cli;

use std::sync::Arc;

use burrow_gateway::{App, AppState};
use burrow_storage::RedbLinkStore;
use clap::Parser;
use tokio::signal;
use tracing::info;

use crate::cli::CLI;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        db_path = %config.db_path.display(),
        "starting burrow http server"
    );

    let store = Arc::new(RedbLinkStore::open(&config.db_path)?);
    let state = AppState::with_store(store);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("burrow http server stopped");
    Ok(())
}

/// Completes on SIGINT or SIGTERM so the server drains and the store
/// handle is released on signal-triggered exits too.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
