//! The fetch-and-pagination state coordinator
//!
//! # Overview
//!
//! [`JobsFeed`] reacts to query changes: every [`set_query`] cancels the
//! in-flight request pair, marks the state as loading, and spawns two
//! independent reads with identical parameters: one for the page's listings,
//! one probing whether a further page exists. The two reads race freely;
//! `jobs` and `has_next_page` may settle in either order.
//!
//! State flows one way: read tasks emit [`FetchEvent`]s, a single driver task
//! applies them to [`FetchState`] through the reducer and publishes snapshots
//! on a watch channel. Each applied transition is atomic with respect to
//! observers.
//!
//! Cancellation is cooperative and enforced twice. A superseded read is told
//! to stop through its `CancellationToken`, and should its result already be
//! on the wire, the driver discards it because its generation no longer
//! matches. Either way a cancelled read produces no state transition.
//!
//! [`set_query`]: JobsFeed::set_query

mod state;

pub use state::{FetchEvent, FetchState};

use crate::source::JobSource;
use crate::types::{Job, PageRequest};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// What the watch channel carries: the consolidated fetch state plus the
/// bookkeeping needed to tell when the latest request pair has settled.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Consolidated fetch state
    pub state: FetchState,
    /// Generation of the most recent request pair the driver has seen
    pub generation: u64,
    /// Reads of that generation that have not yet reported
    pub pending_reads: u8,
}

impl FeedSnapshot {
    /// Whether every read of the snapshot's generation has reported
    pub fn is_settled(&self) -> bool {
        self.pending_reads == 0
    }
}

/// An event stamped with the generation of the request pair that produced it
enum Envelope {
    /// A fresh request pair was issued
    Begin { generation: u64 },
    /// A read of the given generation resolved
    Event { generation: u64, event: FetchEvent },
}

/// Reactive fetcher for paginated job listings.
///
/// ```rust,ignore
/// let mut feed = JobsFeed::new(Arc::new(board));
/// feed.set_query(PageRequest::new(1).with_param("location", "remote"));
/// let state = feed.settled().await;
/// ```
pub struct JobsFeed {
    source: Arc<dyn JobSource>,
    events: mpsc::UnboundedSender<Envelope>,
    snapshot: watch::Receiver<FeedSnapshot>,
    inflight: Option<CancellationToken>,
    generation: u64,
}

impl JobsFeed {
    /// Create a feed over the given source and start its driver task.
    ///
    /// The driver ends when the feed is dropped.
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(FeedSnapshot::default());

        tokio::spawn(drive(events_rx, snapshot_tx));

        Self {
            source,
            events: events_tx,
            snapshot: snapshot_rx,
            inflight: None,
            generation: 0,
        }
    }

    /// React to a query change.
    ///
    /// Cancels the previous request pair and issues a fresh one: a primary
    /// read for the page's listings and a probe read with identical
    /// parameters whose only purpose is the `has_next_page` verdict.
    pub fn set_query(&mut self, request: PageRequest) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());

        debug!(generation, page = request.page(), "issuing request pair");
        let _ = self.events.send(Envelope::Begin { generation });

        // Primary read: the page's listings
        self.spawn_read(generation, token.clone(), request.clone(), |jobs| {
            FetchEvent::PageLoaded { jobs }
        });

        // Probe read: identical parameters, only the emptiness verdict is kept
        self.spawn_read(generation, token, request, |jobs| FetchEvent::ProbeSettled {
            has_next_page: !jobs.is_empty(),
        });
    }

    fn spawn_read(
        &self,
        generation: u64,
        token: CancellationToken,
        request: PageRequest,
        on_jobs: impl FnOnce(Vec<Job>) -> FetchEvent + Send + 'static,
    ) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                () = token.cancelled() => {
                    trace!(generation, "read cancelled before resolution");
                    return;
                }
                outcome = source.page(&request) => outcome,
            };

            let event = match outcome {
                Ok(jobs) => on_jobs(jobs),
                Err(error) if error.is_cancelled() => return,
                Err(error) => FetchEvent::Failed {
                    error: Arc::new(error),
                },
            };

            let _ = events.send(Envelope::Event { generation, event });
        });
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot.clone()
    }

    /// The current fetch state
    pub fn state(&self) -> FetchState {
        self.snapshot.borrow().state.clone()
    }

    /// Wait until every read for the latest query has resolved, then return
    /// the state. Superseded reads never count: only the newest generation is
    /// awaited.
    pub async fn settled(&self) -> FetchState {
        let generation = self.generation;
        let mut snapshot = self.snapshot.clone();
        let settled = snapshot
            .wait_for(|snap| snap.generation == generation && snap.is_settled())
            .await
            .expect("feed driver ended while feed is alive");
        settled.state.clone()
    }
}

impl Drop for JobsFeed {
    fn drop(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}

impl std::fmt::Debug for JobsFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobsFeed")
            .field("generation", &self.generation)
            .field("snapshot", &*self.snapshot.borrow())
            .finish_non_exhaustive()
    }
}

/// Driver loop: serializes reducer application and publishes snapshots.
///
/// Envelope order on the channel is send order, so a `Begin` always precedes
/// the events of its own generation and follows every event sent before the
/// query changed. An event whose generation is not current belongs to a
/// superseded pair and is dropped without touching the state.
async fn drive(
    mut events: mpsc::UnboundedReceiver<Envelope>,
    snapshot: watch::Sender<FeedSnapshot>,
) {
    let mut current = 0u64;

    while let Some(envelope) = events.recv().await {
        match envelope {
            Envelope::Begin { generation } => {
                current = generation;
                snapshot.send_modify(|snap| {
                    snap.generation = generation;
                    snap.pending_reads = 2;
                    snap.state.apply(FetchEvent::RequestIssued);
                });
            }
            Envelope::Event { generation, event } if generation == current => {
                snapshot.send_modify(|snap| {
                    snap.pending_reads = snap.pending_reads.saturating_sub(1);
                    snap.state.apply(event);
                });
            }
            Envelope::Event { generation, .. } => {
                trace!(generation, current, "discarding superseded read result");
            }
        }
    }
}

#[cfg(test)]
mod tests;
