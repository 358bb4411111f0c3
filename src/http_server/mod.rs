//! # sheetdesk HTTP Server Module
//!
//! # Endpoints
//!
//! - `GET /` - Table snapshot
//! - `POST /` - Create / update / delete / duplicate
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod sheet_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
