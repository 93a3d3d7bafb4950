mod core;
mod health;

pub use core::{PgQuery, PgQueryAs, Store};
pub use health::{PoolStats, StatusReport};

use crate::error::AppError;
use crate::state::AppState;

/// Centralized helper to reach the store from application code.
///
/// Returns a borrowed handle when the state carries one, or a
/// `DbUnavailable` error for store-less (test) states.
pub fn require_store(state: &AppState) -> Result<&Store, AppError> {
    state
        .store
        .as_ref()
        .ok_or_else(|| AppError::db_unavailable("store not configured".to_string()))
}
