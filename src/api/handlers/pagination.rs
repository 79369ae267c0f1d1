//! Pagination handlers: page-link windows for raw page counts and listings.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::LINK;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ListingParams, ListingResponse, PaginationMeta, WindowParams, WindowResponse};
use crate::app_state::AppState;
use crate::domain::Listing;
use crate::error::{ErrorResponse, PaginationError};

/// Path of the listing endpoint, used to build `Link` header targets.
const LISTING_PATH: &str = "/api/v1/pagination/listing";

/// `GET /api/v1/pagination/window` — Page links for a page count.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] on malformed, negative, or
/// zero-page input.
#[utoipa::path(
    get,
    path = "/api/v1/pagination/window",
    tag = "Pagination",
    summary = "Build a pagination window",
    description = "Returns the ordered page links for the current page out of a total page count. The list is empty when the page lies beyond the last page.",
    params(WindowParams),
    responses(
        (status = 200, description = "Page links", body = WindowResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
    )
)]
pub async fn get_window(
    State(state): State<AppState>,
    params: Result<Query<WindowParams>, QueryRejection>,
) -> Result<impl IntoResponse, PaginationError> {
    let Query(params) = params?;
    let (request, window) = state
        .pagination_service
        .window(params.page, params.total_pages)?;

    Ok(Json(WindowResponse {
        page: request.current_page(),
        total_pages: request.total_pages(),
        links: window.into_links(),
    }))
}

/// `GET /api/v1/pagination/listing` — Page links and metadata for an item listing.
///
/// Also sets an RFC 8288 `Link` header with the `first`, `prev`, `next`
/// and `last` relations that exist for the requested page.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] on malformed, negative, or
/// zero-page input.
#[utoipa::path(
    get,
    path = "/api/v1/pagination/listing",
    tag = "Pagination",
    summary = "Paginate an item listing",
    description = "Derives the page count from the item count and page size, then returns pagination metadata and page links.",
    params(ListingParams),
    responses(
        (status = 200, description = "Pagination metadata and page links", body = ListingResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
    )
)]
pub async fn get_listing(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<impl IntoResponse, PaginationError> {
    let Query(params) = params?;
    let (listing, window) = state.pagination_service.listing(
        params.page,
        params.per_page,
        params.total_items,
    )?;

    let mut headers = HeaderMap::new();
    if let Some(value) = link_header(&listing) {
        let value = HeaderValue::from_str(&value)
            .map_err(|e| PaginationError::Internal(format!("invalid Link header: {e}")))?;
        headers.insert(LINK, value);
    }

    Ok((
        headers,
        Json(ListingResponse {
            pagination: PaginationMeta::from(&listing),
            links: window.into_links(),
        }),
    ))
}

/// Formats the `Link` header for a listing, or `None` if it has no pages.
fn link_header(listing: &Listing) -> Option<String> {
    if listing.total_pages == 0 {
        return None;
    }

    let target = |page: u32, rel: &str| {
        format!(
            "<{LISTING_PATH}?page={page}&per_page={}&total_items={}>; rel=\"{rel}\"",
            listing.per_page, listing.total_items
        )
    };

    let mut parts = vec![target(1, "first")];
    if let Some(prev) = listing.prev_page() {
        parts.push(target(prev, "prev"));
    }
    if let Some(next) = listing.next_page() {
        parts.push(target(next, "next"));
    }
    parts.push(target(listing.total_pages, "last"));
    Some(parts.join(", "))
}

/// Pagination routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pagination/window", get(get_window))
        .route("/pagination/listing", get(get_listing))
}
