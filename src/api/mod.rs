//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! All pagination endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "knolx-pager", description = "Pagination windows for Knolx list views"),
    paths(
        handlers::pagination::get_window,
        handlers::pagination::get_listing,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::WindowResponse,
        dto::ListingResponse,
        dto::PaginationMeta,
        crate::domain::PageLink,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Pagination", description = "Page-link windows"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
