//! HTTP server initialization and runtime setup.
//!
//! Builds the collaborator set, shared state, and Axum server lifecycle,
//! including graceful shutdown on SIGINT/SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use tokio::signal;

use crate::clients::{
    AskamaRenderer, FeedbackBackend, HttpFeedbackBackend, NavigationCache, NullNavigationCache,
    Renderer,
};
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The Askama page renderer
/// - The feedback API client (authorized with the service auth token)
/// - Navigation content lookup (a no-op until a cache service is wired up)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let config = Arc::new(config);

    let renderer: Arc<dyn Renderer> = Arc::new(AskamaRenderer::new());
    let backend: Arc<dyn FeedbackBackend> = Arc::new(HttpFeedbackBackend::new(
        config.api_router_url.clone(),
        config.service_auth_token.clone(),
    ));
    let navigation: Arc<dyn NavigationCache> = Arc::new(NullNavigationCache::new());

    let state = AppState {
        config: config.clone(),
        renderer,
        backend,
        navigation,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let shutdown_timeout = config.graceful_shutdown_timeout_secs;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("commencing graceful shutdown (timeout {shutdown_timeout}s)");
        })
        .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
