//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    catalog::Catalog, config::AssetsConfig, db::SolutionStore, middleware::SessionResolver,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Read side of the solutions table
    store: Arc<dyn SolutionStore>,

    /// Holes and language roster, immutable after startup
    catalog: Catalog,

    sessions: SessionResolver,

    assets: AssetsConfig,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        store: Arc<dyn SolutionStore>,
        catalog: Catalog,
        sessions: SessionResolver,
        assets: AssetsConfig,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                catalog,
                sessions,
                assets,
            }),
        }
    }

    pub fn store(&self) -> &dyn SolutionStore {
        self.inner.store.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn sessions(&self) -> &SessionResolver {
        &self.inner.sessions
    }

    pub fn assets(&self) -> &AssetsConfig {
        &self.inner.assets
    }
}
