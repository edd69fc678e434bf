use crate::error::{CliError, CliResult};
use anyhow::Context;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use thinktool::mcp::McpServer;
use thinktool::Config;
use tokio_util::sync::CancellationToken;

/// Serve MCP over stdin/stdout until the client disconnects or `shutdown` fires.
///
/// A handshake or transport failure is returned as a server error (exit 1).
pub async fn serve_stdio(shutdown: CancellationToken) -> CliResult<()> {
    let config = Config::new();
    let server = McpServer::new(config);

    let service = serve_server(server, stdio())
        .await
        .context("failed to start MCP server on stdio")?;

    tracing::info!("Thinktool MCP server running on stdio");

    tokio::select! {
        result = service.waiting() => {
            let reason = result.map_err(CliError::server)?;
            tracing::info!("MCP client disconnected: {:?}", reason);
        }
        _ = shutdown.cancelled() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("MCP server exited successfully");
    Ok(())
}

/// Run the stdio server with Ctrl-C wired to shutdown.
pub async fn run_server() -> CliResult<()> {
    let shutdown = CancellationToken::new();
    let signal_shutdown = shutdown.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_shutdown.cancel(),
            Err(e) => tracing::warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    serve_stdio(shutdown).await
}
