use crate::infra::db::Store;

/// Application state containing shared resources.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relational store handle (absent in store-less test scenarios).
    pub store: Option<Store>,
}

impl AppState {
    /// State backed by a connected store.
    pub fn new(store: Store) -> Self {
        Self { store: Some(store) }
    }

    /// State without a store, for handler tests that never reach the
    /// database.
    pub fn without_store() -> Self {
        Self { store: None }
    }
}
