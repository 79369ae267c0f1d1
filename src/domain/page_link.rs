//! Page-link descriptors consumed by the rendering layer.
//!
//! A [`PageLink`] is one visual slot in the pagination control: either a
//! concrete page number (active or inactive) or an ellipsis placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminant of a [`PageLink`], without its page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// The page currently being displayed.
    Active,
    /// Any other reachable page.
    Inactive,
    /// A gap placeholder; not clickable.
    Ellipsis,
}

/// A single slot of the pagination control.
///
/// Serialized with an internal `kind` tag:
/// ```json
/// {"kind": "active", "page": 3}
/// {"kind": "ellipsis"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    /// Link to the current page.
    Active {
        /// One-based page number.
        page: u32,
    },
    /// Link to another page.
    Inactive {
        /// One-based page number.
        page: u32,
    },
    /// Gap between the window and the trailing link.
    Ellipsis,
}

impl PageLink {
    /// Returns a page link for `page`, active iff it equals `current_page`.
    #[must_use]
    pub const fn for_page(page: u32, current_page: u32) -> Self {
        if page == current_page {
            Self::Active { page }
        } else {
            Self::Inactive { page }
        }
    }

    /// Returns the page number, or `None` for an ellipsis.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self {
            Self::Active { page } | Self::Inactive { page } => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// Returns the link kind.
    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        match self {
            Self::Active { .. } => LinkKind::Active,
            Self::Inactive { .. } => LinkKind::Inactive,
            Self::Ellipsis => LinkKind::Ellipsis,
        }
    }

    /// Returns `true` for the current-page link.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Compact text form, e.g. `1 2 [3] 4 5 … 10` when joined with spaces.
impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active { page } => write!(f, "[{page}]"),
            Self::Inactive { page } => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn for_page_marks_current_active() {
        assert_eq!(PageLink::for_page(3, 3), PageLink::Active { page: 3 });
        assert_eq!(PageLink::for_page(4, 3), PageLink::Inactive { page: 4 });
    }

    #[test]
    fn ellipsis_has_no_page() {
        assert_eq!(PageLink::Ellipsis.page(), None);
        assert_eq!(PageLink::Ellipsis.kind(), LinkKind::Ellipsis);
        assert!(!PageLink::Ellipsis.is_active());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let Ok(active) = serde_json::to_value(PageLink::Active { page: 3 }) else {
            panic!("serialization failed");
        };
        assert_eq!(active, serde_json::json!({"kind": "active", "page": 3}));

        let Ok(gap) = serde_json::to_value(PageLink::Ellipsis) else {
            panic!("serialization failed");
        };
        assert_eq!(gap, serde_json::json!({"kind": "ellipsis"}));
    }

    #[test]
    fn deserializes_inactive() {
        let parsed: Result<PageLink, _> =
            serde_json::from_str(r#"{"kind":"inactive","page":7}"#);
        let Ok(link) = parsed else {
            panic!("deserialization failed");
        };
        assert_eq!(link.page(), Some(7));
        assert_eq!(link.kind(), LinkKind::Inactive);
    }

    #[test]
    fn display_brackets_active_page() {
        assert_eq!(PageLink::Active { page: 2 }.to_string(), "[2]");
        assert_eq!(PageLink::Inactive { page: 9 }.to_string(), "9");
        assert_eq!(PageLink::Ellipsis.to_string(), "…");
    }
}
