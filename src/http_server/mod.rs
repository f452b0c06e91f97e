//! # HTTP Server Module
//!
//! Serves the film query API over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/content/:container` - Film query over one container

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
