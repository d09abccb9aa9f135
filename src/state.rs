//! Shared application state passed to all handlers.

use crate::store::CatalogStore;
use std::sync::Arc;

/// The store client is injected here rather than held as a module-level
/// singleton, so tests can substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}
