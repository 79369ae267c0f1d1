//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::PagerConfig;
use crate::service::PaginationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pagination service for window construction.
    pub pagination_service: Arc<PaginationService>,
}

impl AppState {
    /// Builds the state from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &PagerConfig) -> Self {
        Self {
            pagination_service: Arc::new(PaginationService::from_config(config)),
        }
    }
}
