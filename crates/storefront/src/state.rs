//! Application state shared across handlers.

use std::sync::Arc;

use crate::backoffice::Backoffice;
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::services::Latency;

/// Errors building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("back-office seed data: {0}")]
    Backoffice(#[from] serde_json::Error),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Per-visitor state is not here; it lives in
/// each visitor's session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    backoffice: Backoffice,
}

impl AppState {
    /// Load the catalog and seed the back office.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is malformed.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let catalog = Catalog::load()?;
        let backoffice = Backoffice::seeded()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                backoffice,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn backoffice(&self) -> &Backoffice {
        &self.inner.backoffice
    }

    /// Simulated latency switch from the configuration.
    #[must_use]
    pub fn latency(&self) -> Latency {
        Latency::new(self.inner.config.simulate_latency)
    }
}
