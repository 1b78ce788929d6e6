// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # jobfeed
//!
//! A minimal, Rust-native client for browsing paginated job listings.
//!
//! ## Features
//!
//! - **Reactive page fetching**: every query change issues a fresh pair of
//!   reads (page data + next-page probe) and cancels the superseded pair
//! - **Consolidated state**: `{loading, jobs, error, has_next_page}` published
//!   through a watch channel, mutated only by a four-case reducer
//! - **Pure pagination control**: computes navigation affordances from
//!   `{page, has_next_page}` and resolves page-change requests
//! - **Terminal browsing**: one-shot `fetch` and interactive `browse` commands
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jobfeed::{FeedConfig, JobBoard, JobsFeed, PageRequest, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let board = JobBoard::new(FeedConfig::default())?;
//!     let mut feed = JobsFeed::new(Arc::new(board));
//!
//!     feed.set_query(PageRequest::new(1).with_param("description", "rust"));
//!     let state = feed.settled().await;
//!
//!     for job in &state.jobs {
//!         println!("{}", job.title().unwrap_or("(untitled)"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          JobsFeed                               │
//! │  set_query(PageRequest)    subscribe() → watch<FeedSnapshot>    │
//! │  two reads per change, superseded pairs cancelled               │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴─────────┬───────────────────────┐
//! │   Source     │         HTTP            │      Pagination       │
//! ├──────────────┼─────────────────────────┼───────────────────────┤
//! │ JobSource    │ GET + query params      │ PageItem rendering    │
//! │ JobBoard     │ status classification   │ PageChange stepping   │
//! └──────────────┴─────────────────────────┴───────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for jobfeed
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client
pub mod http;

/// Job sources (the trait seam and the HTTP job board)
pub mod source;

/// The fetch-and-pagination state coordinator
pub mod feed;

/// Pagination control model
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FeedConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use feed::{FeedSnapshot, FetchEvent, FetchState, JobsFeed};
pub use pagination::{PageChange, PageItem, PaginationControl};
pub use source::{JobBoard, JobSource};
pub use types::{Job, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
