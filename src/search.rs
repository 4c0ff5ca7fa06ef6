//! Debounced search controller.
//!
//! Keystrokes update `raw_query` immediately; `debounced_query` follows after
//! a quiet period (trailing edge, cancel-and-restart). Each debounced value
//! issues exactly one request, tagged with a generation number. Only the
//! latest generation may write results, so a slow early response can never
//! overwrite a newer result set.
//!
//! Must be used from within a tokio runtime: `set_query` spawns the timer.

use haven_client::HavenApi;
use haven_types::SystemSearchHit;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub raw_query: String,
    pub debounced_query: String,
    pub results: Vec<SystemSearchHit>,
    pub is_searching: bool,
}

pub struct SearchController {
    api: Arc<dyn HavenApi>,
    settings: SearchSettings,
    state: Arc<watch::Sender<SearchState>>,
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
}

impl SearchController {
    pub fn new(api: Arc<dyn HavenApi>, settings: SearchSettings) -> Self {
        let (tx, _rx) = watch::channel(SearchState::default());
        Self {
            api,
            settings,
            state: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let trimmed = query.trim().to_string();
        if trimmed.is_empty() {
            // Invalidate anything in flight and clear without waiting. The bump
            // happens under the watch lock so a timer that already woke cannot
            // claim a newer generation afterwards.
            let generation = Arc::clone(&self.generation);
            self.state.send_modify(|s| {
                generation.fetch_add(1, Ordering::SeqCst);
                s.raw_query = query;
                s.debounced_query.clear();
                s.results.clear();
                s.is_searching = false;
            });
            debug!("search cleared");
            return;
        }

        self.state.send_modify(|s| s.raw_query = query.clone());

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        let settings = self.settings;

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(settings.debounce).await;

            // Abort only lands at the next await, so the input may already
            // have moved on. Check and claim a generation under the lock.
            let mut gen = 0;
            let fired = state.send_if_modified(|s| {
                if s.raw_query != query || s.debounced_query == query {
                    return false;
                }
                gen = generation.fetch_add(1, Ordering::SeqCst) + 1;
                s.debounced_query = query;
                s.is_searching = true;
                true
            });
            if !fired {
                return;
            }
            debug!(gen, query = %trimmed, "debounce fired");

            // Detached: aborting this timer must not cancel a request that
            // has already gone out; the generation check discards it instead.
            let request = tokio::spawn(run_search(
                api,
                state,
                generation,
                gen,
                trimmed,
                settings.limit,
            ));
            let _ = request.await;
        }));
    }

    /// Wait for the pending debounce timer and the request it issues.
    pub async fn flush(&mut self) {
        if let Some(timer) = self.timer.take() {
            let _ = timer.await;
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

async fn run_search(
    api: Arc<dyn HavenApi>,
    state: Arc<watch::Sender<SearchState>>,
    generation: Arc<AtomicU64>,
    gen: u64,
    query: String,
    limit: usize,
) {
    let results = match api.search_systems(&query, limit).await {
        Ok(resp) => resp.results,
        Err(e) => {
            warn!(query = %query, error = %e, "search failed; showing no results");
            Vec::new()
        }
    };

    let accepted = state.send_if_modified(|s| {
        if generation.load(Ordering::SeqCst) != gen {
            return false;
        }
        s.results = results;
        s.is_searching = false;
        true
    });

    if !accepted {
        debug!(gen, query = %query, "discarding stale search response");
    }
}
