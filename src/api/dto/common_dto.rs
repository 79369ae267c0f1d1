//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Listing;

/// Pagination metadata included in listing responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page after clamping.
    pub per_page: u32,
    /// Total number of items.
    pub total_items: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl From<&Listing> for PaginationMeta {
    fn from(listing: &Listing) -> Self {
        Self {
            page: listing.page,
            per_page: listing.per_page,
            total_items: listing.total_items,
            total_pages: listing.total_pages,
            has_prev: listing.prev_page().is_some(),
            has_next: listing.next_page().is_some(),
        }
    }
}
