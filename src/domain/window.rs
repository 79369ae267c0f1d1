//! Pagination windowing policy.
//!
//! [`PaginationWindowBuilder`] turns a `(current_page, total_pages)` pair into
//! the ordered [`PageLink`]s of a compact pagination control: a run of at
//! most five page numbers, then (for more than five pages) an ellipsis and a
//! trailing link to the last page.
//!
//! ```text
//! build(3, 10)   1 2 [3] 4 5 … 10
//! build(7, 20)   5 6 [7] 8 9 … 20
//! build(18, 20)  15 16 17 [18] 19 … 20
//! build(10, 10)  6 7 8 9 [10] … [10]
//! ```
//!
//! The last example shows the legacy duplicate trailing link emitted when the
//! current page is the last one. It is kept by default; see
//! [`PaginationWindowBuilder::collapse_duplicate_trailing`].

use std::fmt;
use std::ops::Deref;

use super::{PageLink, PaginationRequest};

/// Number of consecutive page numbers shown before the ellipsis.
pub const WINDOW_LEN: u32 = 5;

/// Upper bound on the number of slots in a window (5 pages, ellipsis, last).
pub const MAX_SLOTS: usize = 7;

/// Ordered page links, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow(Vec<PageLink>);

impl PageWindow {
    /// Returns the links as a slice.
    #[must_use]
    pub fn links(&self) -> &[PageLink] {
        &self.0
    }

    /// Consumes the window, returning the underlying links.
    #[must_use]
    pub fn into_links(self) -> Vec<PageLink> {
        self.0
    }

    /// Returns the page of the first active link, if any.
    #[must_use]
    pub fn active_page(&self) -> Option<u32> {
        self.0.iter().find(|l| l.is_active()).and_then(PageLink::page)
    }

    /// Returns the concrete page numbers in visual order, skipping ellipses.
    #[must_use]
    pub fn pages(&self) -> Vec<u32> {
        self.0.iter().filter_map(PageLink::page).collect()
    }
}

impl Deref for PageWindow {
    type Target = [PageLink];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{link}")?;
        }
        Ok(())
    }
}

/// Builds [`PageWindow`]s according to the fixed windowing policy.
///
/// The builder is a stateless value; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationWindowBuilder {
    collapse_duplicate_trailing: bool,
}

impl PaginationWindowBuilder {
    /// Creates a builder that reproduces the legacy output exactly.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collapse_duplicate_trailing: false,
        }
    }

    /// When `true`, a window that already ends at the last page is not
    /// followed by an ellipsis and a second link to that page.
    #[must_use]
    pub const fn collapse_duplicate_trailing(mut self, collapse: bool) -> Self {
        self.collapse_duplicate_trailing = collapse;
        self
    }

    /// Builds the window for a validated request.
    #[must_use]
    pub fn build_request(&self, request: PaginationRequest) -> PageWindow {
        self.build(request.current_page(), request.total_pages())
    }

    /// Builds the window for `current_page` out of `total_pages`.
    ///
    /// Returns an empty window when `current_page` is zero or exceeds
    /// `total_pages`.
    #[must_use]
    pub fn build(&self, current_page: u32, total_pages: u32) -> PageWindow {
        if current_page == 0 || current_page > total_pages {
            return PageWindow::default();
        }

        let mut links = Vec::with_capacity(MAX_SLOTS);

        if total_pages <= WINDOW_LEN {
            push_pages(&mut links, 1, total_pages, current_page);
            return PageWindow(links);
        }

        // From here on total_pages > 5.
        let near_end = total_pages.saturating_sub(2);
        let (first, last) = if current_page < WINDOW_LEN {
            (1, WINDOW_LEN)
        } else if current_page == total_pages {
            (current_page.saturating_sub(4), current_page)
        } else if current_page < near_end {
            (current_page.saturating_sub(2), current_page.saturating_add(2))
        } else if current_page == near_end {
            (current_page.saturating_sub(3), current_page.saturating_add(1))
        } else {
            (current_page.saturating_sub(4), current_page)
        };

        push_pages(&mut links, first, last, current_page);

        if self.collapse_duplicate_trailing && last == total_pages {
            return PageWindow(links);
        }

        links.push(PageLink::Ellipsis);
        links.push(PageLink::for_page(total_pages, current_page));
        PageWindow(links)
    }
}

/// Builds the window with the legacy policy.
///
/// Shorthand for `PaginationWindowBuilder::new().build(current_page, total_pages)`.
#[must_use]
pub fn build(current_page: u32, total_pages: u32) -> PageWindow {
    PaginationWindowBuilder::new().build(current_page, total_pages)
}

fn push_pages(links: &mut Vec<PageLink>, first: u32, last: u32, current_page: u32) {
    links.extend((first..=last).map(|page| PageLink::for_page(page, current_page)));
}
