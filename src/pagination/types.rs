//! Pagination item and interaction types

use std::fmt;

/// One affordance in the rendered pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Step back one page
    Previous,
    /// Gap between the first page and the current neighbourhood
    Ellipsis,
    /// A numbered page control
    Number {
        /// The page this control navigates to
        page: u32,
        /// Marks the current page
        active: bool,
    },
    /// Step forward one page
    Next,
}

impl PageItem {
    /// A numbered, inactive control
    pub fn number(page: u32) -> Self {
        Self::Number {
            page,
            active: false,
        }
    }

    /// The active (current page) control
    pub fn active(page: u32) -> Self {
        Self::Number { page, active: true }
    }

    /// The page this item navigates to from `current`.
    ///
    /// The ellipsis and the active item navigate nowhere.
    pub fn target(&self, current: u32) -> Option<u32> {
        match self {
            Self::Previous => Some(PageChange::Delta(-1).apply(current)),
            Self::Next => Some(PageChange::Delta(1).apply(current)),
            Self::Number { active: true, .. } | Self::Ellipsis => None,
            Self::Number { page, .. } => Some(PageChange::Absolute(*page).apply(current)),
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "«"),
            Self::Ellipsis => write!(f, "…"),
            Self::Number { page, active: true } => write!(f, "[{page}]"),
            Self::Number { page, .. } => write!(f, "{page}"),
            Self::Next => write!(f, "»"),
        }
    }
}

/// A page-change request: relative step or absolute target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// Adjust the page by a signed amount
    Delta(i64),
    /// Jump to a specific page
    Absolute(u32),
}

impl PageChange {
    /// Resolve the change against the current page.
    ///
    /// Results are clamped to the 1-based page range.
    pub fn apply(self, current: u32) -> u32 {
        match self {
            Self::Delta(delta) => {
                let next = i64::from(current).saturating_add(delta);
                u32::try_from(next.max(1)).unwrap_or(u32::MAX)
            }
            Self::Absolute(page) => page.max(1),
        }
    }
}
