//! Pagination service: validates caller input and builds windows.

use crate::config::PagerConfig;
use crate::domain::{Listing, PageWindow, PaginationRequest, PaginationWindowBuilder};
use crate::error::PaginationError;

/// Entry point used by the HTTP handlers.
///
/// Immutable after construction; share it behind an `Arc`. Every method
/// follows the same pattern: validate → build → log → return.
#[derive(Debug, Clone)]
pub struct PaginationService {
    builder: PaginationWindowBuilder,
    default_per_page: u32,
    max_per_page: u32,
}

impl Default for PaginationService {
    fn default() -> Self {
        Self::from_config(&PagerConfig::default())
    }
}

impl PaginationService {
    /// Creates a service with the given builder and page-size limits.
    ///
    /// `max_per_page` is raised to 1 if zero; `default_per_page` is clamped
    /// into `1..=max_per_page`.
    #[must_use]
    pub fn new(builder: PaginationWindowBuilder, default_per_page: u32, max_per_page: u32) -> Self {
        let max_per_page = max_per_page.max(1);
        Self {
            builder,
            default_per_page: default_per_page.clamp(1, max_per_page),
            max_per_page,
        }
    }

    /// Creates a service from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &PagerConfig) -> Self {
        let builder = PaginationWindowBuilder::new()
            .collapse_duplicate_trailing(config.collapse_duplicate_trailing);
        Self::new(builder, config.default_per_page, config.max_per_page)
    }

    /// Builds the window for `current_page` out of `total_pages`, returning
    /// the validated request alongside it.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if the input fails
    /// [`PaginationRequest::new`] validation.
    pub fn window(
        &self,
        current_page: i64,
        total_pages: i64,
    ) -> Result<(PaginationRequest, PageWindow), PaginationError> {
        let request = PaginationRequest::new(current_page, total_pages)?;
        let window = self.builder.build_request(request);

        if !request.is_in_range() {
            tracing::debug!(
                current_page = request.current_page(),
                total_pages = request.total_pages(),
                "page beyond last page; window is empty"
            );
        } else {
            tracing::debug!(
                current_page = request.current_page(),
                total_pages = request.total_pages(),
                links = window.len(),
                "pagination window built"
            );
        }
        Ok((request, window))
    }

    /// Describes one page of a listing and builds its window.
    ///
    /// `per_page` defaults to the configured value when `None`; zero is
    /// raised to 1 and values above the maximum are lowered to it. A page
    /// beyond the listing yields an empty window rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if `page` is below 1,
    /// `per_page` or `total_items` is negative, or `page` or `total_items`
    /// exceeds `u32::MAX`.
    pub fn listing(
        &self,
        page: i64,
        per_page: Option<i64>,
        total_items: i64,
    ) -> Result<(Listing, PageWindow), PaginationError> {
        let page = PaginationRequest::new(page, 0)?.current_page();
        let total_items = u32::try_from(total_items).map_err(|_| {
            PaginationError::InvalidArgument(format!(
                "total_items must be between 0 and {}, got {total_items}",
                u32::MAX
            ))
        })?;
        let per_page = self.clamp_per_page(per_page)?;
        let listing = Listing::new(page, per_page, total_items);
        let window = self.builder.build(listing.page, listing.total_pages);

        tracing::debug!(
            page = listing.page,
            per_page = listing.per_page,
            total_items = listing.total_items,
            total_pages = listing.total_pages,
            links = window.len(),
            "listing window built"
        );
        Ok((listing, window))
    }

    fn clamp_per_page(&self, per_page: Option<i64>) -> Result<u32, PaginationError> {
        match per_page {
            None => Ok(self.default_per_page),
            Some(n) if n < 0 => Err(PaginationError::InvalidArgument(format!(
                "per_page must not be negative, got {n}"
            ))),
            Some(n) => {
                let clamped = n.clamp(1, i64::from(self.max_per_page));
                Ok(u32::try_from(clamped).unwrap_or(self.max_per_page))
            }
        }
    }
}
