//! Paged listings described by item count and page size.
//!
//! List screens know how many items exist and how many fit on a page; the
//! window builder wants a page count. [`Listing`] bridges the two.

/// Number of pages needed for `total_items` at `per_page` items each.
///
/// Zero items means zero pages. A `per_page` of zero is treated as one.
#[must_use]
pub const fn total_pages_for(total_items: u32, per_page: u32) -> u32 {
    let per_page = if per_page == 0 { 1 } else { per_page };
    total_items.div_ceil(per_page)
}

/// Position of one page inside a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// One-based page being shown.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Items across all pages.
    pub total_items: u32,
    /// Pages across the listing.
    pub total_pages: u32,
}

impl Listing {
    /// Creates a listing, deriving `total_pages` from the item count.
    #[must_use]
    pub const fn new(page: u32, per_page: u32, total_items: u32) -> Self {
        Self {
            page,
            per_page,
            total_items,
            total_pages: total_pages_for(total_items, per_page),
        }
    }

    /// Returns the previous page, if the current page has one inside the listing.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        if self.page > 1 && self.page <= self.total_pages {
            Some(self.page - 1)
        } else {
            None
        }
    }

    /// Returns the next page, if the current page has one inside the listing.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.page >= 1 && self.page < self.total_pages {
            Some(self.page + 1)
        } else {
            None
        }
    }
}
