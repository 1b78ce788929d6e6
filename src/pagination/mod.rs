//! Pagination control model
//!
//! A stateless model of page-navigation affordances.
//!
//! # Overview
//!
//! [`PaginationControl`] renders `{page, has_next_page}` into an ordered list
//! of [`PageItem`]s (previous, jump-to-first, ellipsis, numbered neighbours,
//! next) and [`PageChange`] maps interaction with those items back to a page
//! number. Only page 1 and the pages adjacent to the current one are ever
//! reachable; there is no arbitrary jump.

mod control;
mod types;

pub use control::PaginationControl;
pub use types::{PageChange, PageItem};
