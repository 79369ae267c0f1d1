//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod pagination_dto;

pub use common_dto::*;
pub use pagination_dto::*;
