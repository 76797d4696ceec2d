//! Server bootstrap: open storage, build the Yummly client, serve until a
//! shutdown signal arrives.

use anyhow::Context;
use pantry_config::PantryConfig;
use pantry_db::service::PantryService;
use pantry_yummly::YummlyClient;
use tokio::net::TcpListener;
use tokio::signal;

use crate::routes::create_router;
use crate::state::AppState;

/// Build the application state from configuration.
///
/// # Errors
///
/// Fails if the database cannot be opened or the Yummly client cannot be
/// built from the configured values.
pub async fn build_state(config: &PantryConfig) -> anyhow::Result<AppState> {
    let service = PantryService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;

    if let Err(e) = config.require_yummly() {
        tracing::warn!(error = %e, "/yummly routes will fail upstream");
    }
    let yummly = YummlyClient::new(&config.yummly).context("failed to build yummly client")?;

    Ok(AppState::new(service, yummly, config.feed.clone()))
}

/// Serve the API on `config.server` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Fails if state cannot be built or the listener cannot bind.
pub async fn serve(config: &PantryConfig) -> anyhow::Result<()> {
    let state = build_state(config).await?;
    let app = create_router(state);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "pantry listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
