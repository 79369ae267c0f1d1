//! Domain layer: page links, validated requests, listings, and the
//! windowing policy.
//!
//! Everything in this module is pure and synchronous. Rendering the links
//! and fetching the paged data are left to callers.

pub mod listing;
pub mod page_link;
pub mod request;
pub mod window;

pub use listing::{Listing, total_pages_for};
pub use page_link::{LinkKind, PageLink};
pub use request::PaginationRequest;
pub use window::{PageWindow, PaginationWindowBuilder, build};
