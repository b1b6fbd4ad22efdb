//! Portal - server for the aligner marketing site and patient portal
//!
//! Serves the server-rendered Leptos app together with crawler directives,
//! the sitemap, a health check and the optional diagnostics endpoint.

pub mod config;
pub mod crawler;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod routes;
pub mod sitemap;

pub use config::{load_config, Config};
pub use error::{PortalError, Result};

use std::sync::Arc;

use leptos::prelude::LeptosOptions;
use tokio_util::sync::CancellationToken;

use crate::env::ProcessEnv;
use crate::routes::PortalState;

/// Run the portal server until ctrl-c
pub async fn run(config: Config, leptos_options: LeptosOptions) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(config, leptos_options, cancel).await
}

/// Bind and serve until `cancel` is triggered
pub async fn serve(
    config: Config,
    leptos_options: LeptosOptions,
    cancel: CancellationToken,
) -> Result<()> {
    if config.diagnostics.enabled {
        tracing::warn!(
            "Diagnostics endpoint /api/debug-env is enabled and unauthenticated; \
             disable it before exposing this server publicly"
        );
    }

    let addr = config.server.socket_addr();
    let state = PortalState::new(config, Arc::new(ProcessEnv));
    let app = routes::build_app(state, leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PortalError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!("Portal listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Portal stopped");
    Ok(())
}
