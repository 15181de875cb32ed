//! Shared application state.

use std::sync::Arc;

use crate::store::ProductStore;

/// Per-process state built at startup and injected into the router.
///
/// Owning the store here (rather than a process-wide singleton) is what lets
/// tests spin up isolated instances.
#[derive(Debug)]
pub struct AppState {
    /// The product collection.
    pub store: ProductStore,
    /// Shared secret required on mutating endpoints.
    pub api_key: String,
}

impl AppState {
    /// Bundles a store with the configured API key.
    pub fn new(store: ProductStore, api_key: impl Into<String>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}

/// Cheap-to-clone handle used as the axum state.
pub type SharedState = Arc<AppState>;
