use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::api::{self, AppState, SharedState};
use super::store::IssueStore;
use crate::config::{DEFAULT_PORT, RunMode};

/// Configuration for the reporter server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub mode: RunMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: RunMode::Development,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.mode.bind_host(), self.port)
    }
}

/// Build the full application router: status page, health, and issue API.
///
/// Hosts that embed the router in their own listener call this directly and
/// never go through [`start_server`].
pub fn build_router(state: Arc<AppState>) -> Router {
    api::api_router()
        .route("/", get(status_page))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

const ENDPOINTS: [&str; 5] = [
    "GET /health",
    "GET /api/issues",
    "GET /api/issues/{id}",
    "POST /api/issues",
    "PATCH /api/issues/{id}/status",
];

async fn status_page(State(state): State<SharedState>) -> impl IntoResponse {
    let endpoints: String = ENDPOINTS
        .iter()
        .map(|e| format!("        <code>{}</code>\n", e))
        .collect();
    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>API Server Running</title>
  </head>
  <body>
    <div class="container">
      <h1>API is Running</h1>
      <p>Backend server is live on port {port}</p>
      <div class="endpoints">
        <strong>Available endpoints:</strong>
{endpoints}      </div>
    </div>
  </body>
</html>
"#,
        port = state.port,
    ))
}

/// Start the reporter server and block until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let state = AppState::new(IssueStore::new(), config.port);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, mode = %config.mode, "API listening on port {}", local_addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
