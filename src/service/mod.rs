//! Service layer: input validation and window construction.

pub mod pagination_service;

pub use pagination_service::PaginationService;
