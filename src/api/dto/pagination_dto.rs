//! Request and response bodies for the pagination endpoints.
//!
//! Query parameters are read as signed integers so that negative input
//! reaches the service and is rejected with a structured error instead of a
//! bare deserialization failure.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common_dto::PaginationMeta;
use crate::domain::PageLink;

/// Query parameters for `GET /pagination/window`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowParams {
    /// Current page (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

/// Query parameters for `GET /pagination/listing`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// Current page (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Items per page. Defaults to the configured value; clamped to the
    /// configured maximum.
    #[serde(default)]
    pub per_page: Option<i64>,
    /// Total number of items in the listing.
    pub total_items: i64,
}

fn default_page() -> i64 {
    1
}

/// Response body for `GET /pagination/window`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WindowResponse {
    /// Current page echoed from the request.
    pub page: u32,
    /// Total pages echoed from the request.
    pub total_pages: u32,
    /// Page links in left-to-right order. Empty when `page > total_pages`.
    pub links: Vec<PageLink>,
}

/// Response body for `GET /pagination/listing`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingResponse {
    /// Pagination metadata.
    pub pagination: PaginationMeta,
    /// Page links in left-to-right order.
    pub links: Vec<PageLink>,
}
