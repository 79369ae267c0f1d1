//! Validated pagination input.
//!
//! Callers upstream (query strings, JSON bodies) hand over signed integers;
//! [`PaginationRequest::new`] is the single place where those are checked
//! and narrowed to the unsigned values the window builder works with.

use crate::error::PaginationError;

/// A `(current_page, total_pages)` pair that passed validation.
///
/// `current_page` is at least 1; `total_pages` may be zero. A request whose
/// current page lies beyond the last page is valid and yields an empty
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationRequest {
    current_page: u32,
    total_pages: u32,
}

impl PaginationRequest {
    /// Validates raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if `current_page` is
    /// below 1, `total_pages` is negative, or either exceeds `u32::MAX`.
    pub fn new(current_page: i64, total_pages: i64) -> Result<Self, PaginationError> {
        if current_page < 1 {
            return Err(PaginationError::InvalidArgument(format!(
                "page must be at least 1, got {current_page}"
            )));
        }
        if total_pages < 0 {
            return Err(PaginationError::InvalidArgument(format!(
                "total_pages must not be negative, got {total_pages}"
            )));
        }
        let current_page = narrow("page", current_page)?;
        let total_pages = narrow("total_pages", total_pages)?;
        Ok(Self {
            current_page,
            total_pages,
        })
    }

    /// Returns the one-based current page.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the total page count.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns `true` when the current page falls inside `1..=total_pages`.
    #[must_use]
    pub const fn is_in_range(&self) -> bool {
        self.current_page <= self.total_pages
    }
}

fn narrow(field: &str, value: i64) -> Result<u32, PaginationError> {
    u32::try_from(value).map_err(|_| {
        PaginationError::InvalidArgument(format!("{field} is too large: {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let request = PaginationRequest::new(3, 10);
        assert_eq!(
            request.ok().map(|r| (r.current_page(), r.total_pages())),
            Some((3, 10))
        );
    }

    #[test]
    fn accepts_zero_total_pages() {
        let request = PaginationRequest::new(1, 0).ok();
        assert_eq!(request.map(|r| r.is_in_range()), Some(false));
    }

    #[test]
    fn accepts_page_beyond_total() {
        let request = PaginationRequest::new(6, 3).ok();
        assert_eq!(request.map(|r| r.is_in_range()), Some(false));
    }

    #[test]
    fn rejects_non_positive_page() {
        assert!(matches!(
            PaginationRequest::new(0, 10),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            PaginationRequest::new(-1, 10),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_negative_total() {
        assert!(matches!(
            PaginationRequest::new(1, -3),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_values_beyond_u32() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(PaginationRequest::new(too_big, too_big).is_err());
        assert!(PaginationRequest::new(1, too_big).is_err());
    }
}
