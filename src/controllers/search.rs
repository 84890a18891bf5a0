//! Debounced live patient search.
//!
//! Keystrokes reschedule a dispatch after a quiet period; only the last
//! keystroke of a burst reaches the network. The debounce cancels
//! *scheduling* only: a request already in flight always runs to
//! completion and is dropped at render time if it has been superseded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::api::ClinicClient;
use crate::config;
use crate::ui::SearchPanel;

/// Controller bound to the patient search field and its results region.
pub struct SearchController {
    client: Arc<ClinicClient>,
    panel: Arc<Mutex<SearchPanel>>,
    quiet_period: Duration,
    /// Pending scheduled dispatch; each keystroke replaces (aborts) it.
    pending: Mutex<Option<JoinHandle<()>>>,
    /// Input generation. Every dispatch tags itself with the next value;
    /// a response whose tag is no longer current never renders.
    generation: Arc<AtomicU64>,
}

impl SearchController {
    /// Bind to the results region. Regions are captured once here, never
    /// looked up again per event.
    pub fn new(client: Arc<ClinicClient>, panel: Arc<Mutex<SearchPanel>>) -> Self {
        Self {
            client,
            panel,
            quiet_period: config::SEARCH_DEBOUNCE,
            pending: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Override the quiet period.
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    /// Keystroke handler. Must be called from within the shell's tokio
    /// runtime: the dispatch is scheduled as a task.
    pub fn input_changed(&self, raw: &str) {
        let query = raw.trim().to_string();
        self.cancel_pending();

        if query.chars().count() < config::MIN_QUERY_LEN {
            self.suppress();
            return;
        }

        let client = Arc::clone(&self.client);
        let panel = Arc::clone(&self.panel);
        let generation = Arc::clone(&self.generation);
        let quiet_period = self.quiet_period;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            // Detached: aborting the schedule must never abort a request
            // already in flight.
            tokio::spawn(dispatch(client, panel, generation, query));
        });
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(handle);
        }
    }

    /// Form submission: bypasses the quiet period, same guards.
    pub async fn submit(&self, raw: &str) {
        let query = raw.trim().to_string();
        self.cancel_pending();

        if query.chars().count() < config::MIN_QUERY_LEN {
            self.suppress();
            return;
        }

        dispatch(
            Arc::clone(&self.client),
            Arc::clone(&self.panel),
            Arc::clone(&self.generation),
            query,
        )
        .await;
    }

    /// Short query: not a search. Hide the region and invalidate
    /// anything still in flight.
    fn suppress(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut panel) = self.panel.lock() {
            panel.clear();
        }
    }

    fn cancel_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

/// One search round-trip: loading indicator, request, render.
async fn dispatch(
    client: Arc<ClinicClient>,
    panel: Arc<Mutex<SearchPanel>>,
    generation: Arc<AtomicU64>,
    query: String,
) {
    let tag = generation.fetch_add(1, Ordering::SeqCst) + 1;
    if let Ok(mut panel) = panel.lock() {
        panel.loading();
    }

    let result = client.search_patients(&query).await;

    if generation.load(Ordering::SeqCst) != tag {
        tracing::debug!(query = %query, "superseded search response dropped");
        return;
    }

    match result {
        Ok(hits) => {
            if let Ok(mut panel) = panel.lock() {
                panel.render(hits);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, query = %query, "patient search failed");
            if let Ok(mut panel) = panel.lock() {
                panel.fail();
            }
        }
    }
}
