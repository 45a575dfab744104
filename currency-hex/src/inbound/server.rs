//! HTTP Server configuration and startup.

use axum::{Router, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::tools::CurrencyTools;
use crate::RateService;

/// Path of the streamable HTTP MCP endpoint.
pub const MCP_PATH: &str = "/mcp";

/// HTTP Server for the currency MCP tool.
pub struct HttpServer {
    service: RateService,
}

impl HttpServer {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: RateService) -> Self {
        Self { service }
    }

    /// Builds the Axum router with all routes.
    ///
    /// Every MCP session gets its own `CurrencyTools`; all of them share the
    /// one `RateService`.
    pub fn router(&self) -> Router {
        let service = self.service.clone();
        let mcp = StreamableHttpService::new(
            move || Ok(CurrencyTools::new(service.clone())),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );

        Router::new()
            .route("/health", get(handlers::health))
            .nest_service(MCP_PATH, mcp)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        let local = listener.local_addr()?;
        tracing::info!("Server listening on {}", local);
        tracing::info!("MCP endpoint: http://{}{}", local, MCP_PATH);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
