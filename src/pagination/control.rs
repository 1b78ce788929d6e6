//! Pagination control rendering

use super::types::{PageChange, PageItem};
use crate::feed::FetchState;
use std::fmt;

/// Stateless pagination control.
///
/// Renders `{page, has_next_page}` into an ordered list of [`PageItem`]s,
/// left to right:
///
/// - `Previous` and a jump-to-first `1` whenever the page is not the first
/// - an `Ellipsis` and the `page - 1` neighbour beyond page 2
/// - the current page, marked active
/// - the `page + 1` neighbour and `Next` whenever a next page exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    page: u32,
    has_next_page: bool,
}

impl PaginationControl {
    /// Create a control for a 1-based page (clamped to `>= 1`)
    pub fn new(page: u32, has_next_page: bool) -> Self {
        Self {
            page: page.max(1),
            has_next_page,
        }
    }

    /// Build a control from the current fetch state.
    ///
    /// An unsettled probe renders like "no next page": the forward controls
    /// appear once the probe has confirmed there is somewhere to go.
    pub fn from_state(page: u32, state: &FetchState) -> Self {
        Self::new(page, state.has_next_page.unwrap_or(false))
    }

    /// The current page
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether a next page exists
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Render the affordance list
    pub fn items(&self) -> Vec<PageItem> {
        let mut items = Vec::new();

        if self.page != 1 {
            items.push(PageItem::Previous);
            items.push(PageItem::number(1));
        }
        if self.page > 2 {
            items.push(PageItem::Ellipsis);
            items.push(PageItem::number(self.page - 1));
        }
        items.push(PageItem::active(self.page));
        if self.has_next_page {
            items.push(PageItem::number(self.page + 1));
            items.push(PageItem::Next);
        }

        items
    }

    /// Resolve a change against the current page
    pub fn change(&self, change: PageChange) -> u32 {
        change.apply(self.page)
    }
}

impl fmt::Display for PaginationControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self.items() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}
