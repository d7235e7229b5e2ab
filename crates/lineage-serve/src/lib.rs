//! HTTP delivery layer.
//!
//! Serves the family tree JSON artifact on one route with permissive CORS
//! headers, and every other path as a static file from the web root. The
//! artifact is only ever read, so requests need no coordination.
//!
//! # Example
//!
//! ```ignore
//! use lineage_serve::{ServeConfig, Server};
//!
//! let server = Server::bind(ServeConfig::default()).await?;
//! server.run_until(async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

mod config;
mod error;
mod handler;
mod http;
mod server;

pub use config::ServeConfig;
pub use error::{Result, ServeError};
pub use handler::handle;
pub use http::{Method, Request, Response, StatusCode};
pub use server::Server;
