//! Fetch state and its reducer
//!
//! [`FetchState`] is the consolidated view a fetch exposes; it is mutated
//! only by [`FetchState::apply`] in response to lifecycle events, never
//! directly by readers.

use crate::error::Error;
use crate::types::Job;
use std::sync::Arc;

/// Consolidated state of the current fetch
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    /// A request pair is in flight
    pub loading: bool,
    /// Listings from the most recently resolved, non-cancelled primary read
    pub jobs: Vec<Job>,
    /// Most recent surfaced failure, if any
    pub error: Option<Arc<Error>>,
    /// Probe verdict: `None` until the probe for some request has settled
    pub has_next_page: Option<bool>,
}

impl FetchState {
    /// Create the initial state: idle, no jobs, no error, probe unsettled
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one lifecycle event.
    ///
    /// Each arm touches only the fields the event owns; everything else is
    /// carried over. A later success does not clear an earlier error; only
    /// `Failed` writes that field.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::RequestIssued => {
                self.loading = true;
            }
            FetchEvent::PageLoaded { jobs } => {
                self.loading = false;
                self.jobs = jobs;
            }
            FetchEvent::ProbeSettled { has_next_page } => {
                self.has_next_page = Some(has_next_page);
            }
            FetchEvent::Failed { error } => {
                self.loading = false;
                self.jobs = Vec::new();
                self.error = Some(error);
            }
        }
    }

    /// Check whether a failure has been surfaced
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Lifecycle events of a fetch, consumed by the reducer
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// A fresh request pair was issued
    RequestIssued,
    /// The primary read resolved with the page's listings
    PageLoaded {
        /// The page's job list, replacing the previous one
        jobs: Vec<Job>,
    },
    /// The probe read resolved
    ProbeSettled {
        /// Whether the probed page came back non-empty
        has_next_page: bool,
    },
    /// Either read failed for a reason other than cancellation
    Failed {
        /// The surfaced failure
        error: Arc<Error>,
    },
}
