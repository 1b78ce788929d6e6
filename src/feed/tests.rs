//! Tests for the fetch coordinator

use super::*;
use crate::error::{Error, Result};
use crate::source::JobSource;
use crate::types::{Job, PageRequest};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

fn job(title: &str) -> Job {
    Job::new(json!({"title": title}))
}

/// In-memory source with a scripted response and delay per page.
struct ScriptedBoard {
    pages: HashMap<u32, Vec<Job>>,
    delays: HashMap<u32, Duration>,
    fail_pages: Vec<u32>,
    calls: AtomicUsize,
}

impl ScriptedBoard {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            delays: HashMap::new(),
            fail_pages: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn page_with(mut self, page: u32, jobs: Vec<Job>) -> Self {
        self.pages.insert(page, jobs);
        self
    }

    fn delay_on(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    fn failing_on(mut self, page: u32) -> Self {
        self.fail_pages.push(page);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSource for ScriptedBoard {
    async fn page(&self, request: &PageRequest) -> Result<Vec<Job>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&request.page()) {
            sleep(*delay).await;
        }
        if self.fail_pages.contains(&request.page()) {
            return Err(Error::http_status(500, "scripted failure"));
        }
        Ok(self.pages.get(&request.page()).cloned().unwrap_or_default())
    }
}

async fn settled_within(feed: &JobsFeed) -> FetchState {
    timeout(Duration::from_secs(2), feed.settled())
        .await
        .expect("feed did not settle in time")
}

// ============================================================================
// Reducer Tests
// ============================================================================

#[test]
fn test_reducer_initial_state() {
    let state = FetchState::new();
    assert!(!state.loading);
    assert!(state.jobs.is_empty());
    assert!(state.error.is_none());
    assert!(state.has_next_page.is_none());
}

#[test]
fn test_reducer_request_issued_only_sets_loading() {
    let mut state = FetchState::new();
    state.jobs = vec![job("stale")];
    state.has_next_page = Some(true);

    state.apply(FetchEvent::RequestIssued);

    assert!(state.loading);
    // Previous page's data stays visible while the next one loads
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.has_next_page, Some(true));
}

#[test]
fn test_reducer_page_loaded() {
    let mut state = FetchState::new();
    state.apply(FetchEvent::RequestIssued);
    state.apply(FetchEvent::PageLoaded {
        jobs: vec![job("a"), job("b")],
    });

    assert!(!state.loading);
    assert_eq!(state.jobs.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn test_reducer_probe_settled() {
    let mut state = FetchState::new();
    state.apply(FetchEvent::ProbeSettled {
        has_next_page: true,
    });
    assert_eq!(state.has_next_page, Some(true));

    state.apply(FetchEvent::ProbeSettled {
        has_next_page: false,
    });
    assert_eq!(state.has_next_page, Some(false));
}

#[test]
fn test_reducer_failed_clears_jobs() {
    let mut state = FetchState::new();
    state.apply(FetchEvent::PageLoaded {
        jobs: vec![job("a")],
    });
    state.apply(FetchEvent::Failed {
        error: Arc::new(Error::http_status(500, "boom")),
    });

    assert!(!state.loading);
    assert!(state.jobs.is_empty());
    assert!(state.has_error());
}

#[test]
fn test_reducer_reads_settle_in_either_order() {
    // Probe before primary
    let mut state = FetchState::new();
    state.apply(FetchEvent::RequestIssued);
    state.apply(FetchEvent::ProbeSettled {
        has_next_page: true,
    });
    assert!(state.loading, "probe alone does not end loading");
    state.apply(FetchEvent::PageLoaded { jobs: vec![job("a")] });
    assert!(!state.loading);
    assert_eq!(state.has_next_page, Some(true));

    // Primary before probe
    let mut state = FetchState::new();
    state.apply(FetchEvent::RequestIssued);
    state.apply(FetchEvent::PageLoaded { jobs: vec![job("a")] });
    assert!(!state.loading);
    assert!(state.has_next_page.is_none());
    state.apply(FetchEvent::ProbeSettled {
        has_next_page: false,
    });
    assert_eq!(state.has_next_page, Some(false));
}

#[test]
fn test_reducer_success_does_not_clear_error() {
    let mut state = FetchState::new();
    state.apply(FetchEvent::Failed {
        error: Arc::new(Error::http_status(500, "boom")),
    });
    state.apply(FetchEvent::RequestIssued);
    state.apply(FetchEvent::PageLoaded { jobs: vec![job("a")] });

    // Only Failed writes the error field
    assert!(state.has_error());
    assert_eq!(state.jobs.len(), 1);
}

// ============================================================================
// Coordinator Tests
// ============================================================================

#[tokio::test]
async fn test_feed_fetch_populates_state() {
    let board = ScriptedBoard::new().page_with(1, vec![job("a"), job("b")]);
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(1));
    let state = settled_within(&feed).await;

    assert!(!state.loading);
    assert_eq!(state.jobs.len(), 2);
    assert!(state.error.is_none());
    // Probe hit the same non-empty page
    assert_eq!(state.has_next_page, Some(true));
}

#[tokio::test]
async fn test_feed_empty_page_means_no_next() {
    let board = ScriptedBoard::new();
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(9));
    let state = settled_within(&feed).await;

    assert!(state.jobs.is_empty());
    assert_eq!(state.has_next_page, Some(false));
}

#[tokio::test]
async fn test_feed_issues_two_reads_per_query() {
    let board = Arc::new(ScriptedBoard::new().page_with(1, vec![job("a")]));
    let mut feed = JobsFeed::new(Arc::clone(&board) as Arc<dyn JobSource>);

    feed.set_query(PageRequest::new(1));
    settled_within(&feed).await;
    assert_eq!(board.calls(), 2);

    // No de-duplication: an identical query issues a fresh pair
    feed.set_query(PageRequest::new(1));
    settled_within(&feed).await;
    assert_eq!(board.calls(), 4);
}

#[tokio::test]
async fn test_feed_failure_surfaces_error_and_clears_jobs() {
    let board = ScriptedBoard::new().failing_on(2);
    let mut feed = JobsFeed::new(Arc::new(board));
    feed.set_query(PageRequest::new(2));
    let state = settled_within(&feed).await;

    assert!(!state.loading);
    assert!(state.jobs.is_empty());
    let error = state.error.expect("failure must surface");
    assert!(matches!(*error, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_feed_rapid_changes_keep_only_latest() {
    // Pages 1 and 2 are slow, page 3 resolves quickly
    let board = ScriptedBoard::new()
        .page_with(1, vec![job("one")])
        .page_with(2, vec![job("two")])
        .page_with(3, vec![job("three")])
        .delay_on(1, Duration::from_millis(200))
        .delay_on(2, Duration::from_millis(200))
        .delay_on(3, Duration::from_millis(10));
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(1));
    feed.set_query(PageRequest::new(2));
    feed.set_query(PageRequest::new(3));

    let state = settled_within(&feed).await;
    assert_eq!(state.jobs[0].title(), Some("three"));
    assert!(state.error.is_none());

    // Give the superseded pairs time to have resolved, had they not been
    // cancelled; the state must not move.
    sleep(Duration::from_millis(400)).await;
    let state = feed.state();
    assert_eq!(state.jobs.len(), 1);
    assert_eq!(state.jobs[0].title(), Some("three"));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_feed_cancelled_failure_is_suppressed() {
    // Page 1 fails slowly; page 2 succeeds. The page-1 failure is cancelled
    // and must never surface.
    let board = ScriptedBoard::new()
        .failing_on(1)
        .delay_on(1, Duration::from_millis(200))
        .page_with(2, vec![job("two")]);
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(1));
    sleep(Duration::from_millis(20)).await;
    feed.set_query(PageRequest::new(2));

    let state = settled_within(&feed).await;
    assert!(state.error.is_none());
    assert_eq!(state.jobs[0].title(), Some("two"));

    sleep(Duration::from_millis(300)).await;
    assert!(feed.state().error.is_none());
}

#[tokio::test]
async fn test_feed_stale_probe_never_wins() {
    // Page 1 is non-empty but slow; page 5 is empty and fast. The stale
    // probe's `true` must not overwrite the current `false`.
    let board = ScriptedBoard::new()
        .page_with(1, vec![job("one")])
        .delay_on(1, Duration::from_millis(200));
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(1));
    sleep(Duration::from_millis(20)).await;
    feed.set_query(PageRequest::new(5));

    let state = settled_within(&feed).await;
    assert_eq!(state.has_next_page, Some(false));

    sleep(Duration::from_millis(300)).await;
    assert_eq!(feed.state().has_next_page, Some(false));
}

#[tokio::test]
async fn test_feed_loading_during_flight() {
    let board = ScriptedBoard::new()
        .page_with(1, vec![job("a")])
        .delay_on(1, Duration::from_millis(100));
    let mut feed = JobsFeed::new(Arc::new(board));

    let mut snapshots = feed.subscribe();
    feed.set_query(PageRequest::new(1));

    let loading = timeout(
        Duration::from_secs(1),
        snapshots.wait_for(|snap| snap.state.loading),
    )
    .await
    .expect("never entered loading")
    .unwrap()
    .state
    .clone();
    assert!(loading.loading);

    let state = settled_within(&feed).await;
    assert!(!state.loading);
}

#[tokio::test]
async fn test_feed_settled_before_any_query() {
    let feed = JobsFeed::new(Arc::new(ScriptedBoard::new()));
    let state = settled_within(&feed).await;
    assert!(!state.loading);
    assert!(state.jobs.is_empty());
    assert!(state.has_next_page.is_none());
}

#[tokio::test]
async fn test_feed_drop_cancels_inflight() {
    let board = Arc::new(
        ScriptedBoard::new()
            .page_with(1, vec![job("a")])
            .delay_on(1, Duration::from_millis(200)),
    );
    let mut feed = JobsFeed::new(Arc::clone(&board) as Arc<dyn JobSource>);
    feed.set_query(PageRequest::new(1));
    sleep(Duration::from_millis(20)).await;
    drop(feed);

    // Both reads started, then were told to stop; nothing panics and the
    // scripted source is released once the tasks unwind.
    sleep(Duration::from_millis(300)).await;
    assert_eq!(board.calls(), 2);
}

#[tokio::test]
async fn test_feed_snapshot_settlement_bookkeeping() {
    let board = ScriptedBoard::new().page_with(1, vec![job("a")]);
    let mut feed = JobsFeed::new(Arc::new(board));

    feed.set_query(PageRequest::new(1));
    settled_within(&feed).await;

    let snapshot = feed.subscribe().borrow().clone();
    assert_eq!(snapshot.generation, 1);
    assert!(snapshot.is_settled());
}
