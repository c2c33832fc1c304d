//! HTTP server for memo.
//!
//! Exposes the note service as a JSON REST API. Every response body is an
//! envelope with a `success` flag and either `data`/`message` or `error`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::build_router;
pub use server::MemoServer;
