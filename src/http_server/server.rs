//! # HTTP Server
//!
//! Combines the sheet and observability routers behind CORS and request
//! tracing layers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::sheet_routes::sheet_routes;
use crate::observability::{Event, Logger};
use crate::sheet::SheetService;

/// HTTP server for the sheet service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a sheet service
    pub fn new(config: HttpServerConfig, service: Arc<SheetService>) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: Arc<SheetService>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let metrics = Arc::clone(service.metrics());

        Router::new()
            .merge(sheet_routes(service))
            .merge(observability_routes(metrics))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::event(Event::ServerStart, &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        Logger::event(
            Event::Serving,
            &[("addr", &listener.local_addr()?.to_string())],
        );
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
