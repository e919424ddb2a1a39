//! API server command, `reporter serve`.

use anyhow::Result;

use reporter::config::RunMode;
use reporter::issues::server::{ServerConfig, start_server};

pub async fn cmd_serve(port: u16, mode: RunMode, open: bool) -> Result<()> {
    // Spawn browser open before starting the server (which blocks)
    if open {
        let url = format!("http://localhost:{}", port);
        tokio::spawn(async move {
            // Small delay to let the server start binding
            tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
            if let Err(e) = open::that(&url) {
                tracing::warn!(error = %e, "failed to open browser");
            }
        });
    }

    start_server(ServerConfig { port, mode }).await
}
