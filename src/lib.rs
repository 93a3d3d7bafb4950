#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use config::db::DbConfig;
pub use error::AppError;
pub use infra::db::{require_store, StatusReport, Store};
pub use middleware::cors::cors_middleware;
pub use state::AppState;
