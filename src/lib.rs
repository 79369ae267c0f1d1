//! # knolx-pager
//!
//! Pagination windows for the Knolx session manager's list views.
//!
//! Given the current page and the total page count, the crate computes the
//! ordered page links a list screen renders under its results: at most five
//! page numbers, then an ellipsis and a link to the last page when there are
//! more than five pages. The computation lives in [`domain`] and is pure; the
//! rest of the crate serves it as JSON over HTTP.
//!
//! ```
//! use knolx_pager::domain::build;
//!
//! let window = build(7, 20);
//! assert_eq!(window.to_string(), "5 6 [7] 8 9 … 20");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PaginationService (service/)
//!     │
//!     └── PaginationWindowBuilder (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::PagerConfig;

/// Builds the fully layered application router for `config`.
///
/// Shared by the binary and the integration tests.
pub fn build_app(config: &PagerConfig) -> Router {
    api::build_router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::from_config(config))
}
