//! Job sources
//!
//! Defines the [`JobSource`] trait, the seam between the fetch coordinator
//! and whatever serves job listings, and [`JobBoard`], the HTTP
//! implementation against the configured endpoint.
//!
//! The coordinator only ever asks a source one question: "give me the page of
//! jobs for this request". Tests answer it with scripted in-memory sources;
//! production answers it with `JobBoard`.

mod board;

pub use board::JobBoard;

use crate::error::Result;
use crate::types::{Job, PageRequest};
use async_trait::async_trait;

/// A source of paginated job listings
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the page of jobs described by `request`.
    ///
    /// Returns the full list for that page; an empty list means the page has
    /// no listings. Errors are surfaced to the caller untouched.
    async fn page(&self, request: &PageRequest) -> Result<Vec<Job>>;
}
