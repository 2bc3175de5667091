//! People screen controller.
//!
//! Owns the draft filter text, the view mode and the displayed record list,
//! and derives the display by querying the gateway. Submissions are gated by
//! a monotonically increasing sequence token so that only the most recently
//! issued request may update the display (last-request-wins); responses that
//! resolve out of order are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::gateway::PeopleGateway;
use crate::models::{PersonRecord, ViewMode};

/// Display phase of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Mutable display state behind the controller lock.
#[derive(Default)]
struct Display {
    draft_filter: String,
    mode: ViewMode,
    phase: Phase,
    records: Vec<PersonRecord>,
}

/// Controller for the People screen.
///
/// All methods take `&self`; submissions may overlap and resolve in any
/// order without corrupting the display.
pub struct PeopleController {
    gateway: Arc<dyn PeopleGateway>,
    org_id: String,
    display: RwLock<Display>,
    seq: AtomicU64,
}

impl PeopleController {
    pub fn new(gateway: Arc<dyn PeopleGateway>, org_id: impl Into<String>) -> Self {
        Self {
            gateway,
            org_id: org_id.into(),
            display: RwLock::new(Display::default()),
            seq: AtomicU64::new(0),
        }
    }

    /// Store the draft filter text. Does not trigger a fetch; the filter is
    /// applied on the next submission.
    pub async fn set_filter_text(&self, text: &str) {
        let mut display = self.display.write().await;
        display.draft_filter = text.to_string();
    }

    /// Submit the current draft filter against the current view mode.
    ///
    /// Enter-key and search-button activation are the same operation; both
    /// callers land here.
    pub async fn submit_search(&self) {
        let (token, filter, mode) = {
            let mut display = self.display.write().await;
            display.phase = Phase::Loading;
            let token = self.issue_token();
            (token, display.draft_filter.clone(), display.mode)
        };

        self.fetch(token, &filter, mode).await;
    }

    /// Switch the view mode and immediately refetch.
    ///
    /// Members mode applies the current filter; the admins query takes only
    /// the organization id, so Admins mode ignores it.
    pub async fn set_view_mode(&self, mode: ViewMode) {
        let (token, filter) = {
            let mut display = self.display.write().await;
            display.mode = mode;
            display.phase = Phase::Loading;
            let token = self.issue_token();
            (token, display.draft_filter.clone())
        };

        self.fetch(token, &filter, mode).await;
    }

    /// The currently displayed records.
    pub async fn records(&self) -> Vec<PersonRecord> {
        self.display.read().await.records.clone()
    }

    /// The current display phase.
    pub async fn phase(&self) -> Phase {
        self.display.read().await.phase
    }

    /// The current view mode.
    pub async fn view_mode(&self) -> ViewMode {
        self.display.read().await.mode
    }

    /// The current draft filter text.
    pub async fn filter_text(&self) -> String {
        self.display.read().await.draft_filter.clone()
    }

    /// Allocate the next sequence token. Must be called while holding the
    /// display write lock so token order matches issue order.
    fn issue_token(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run the gateway query for `token` and apply the outcome unless a
    /// newer submission has been issued meanwhile.
    async fn fetch(&self, token: u64, filter: &str, mode: ViewMode) {
        let result = match mode {
            ViewMode::Members => self.gateway.list_members(&self.org_id, filter).await,
            ViewMode::Admins => self.gateway.list_admins(&self.org_id).await,
        };

        let mut display = self.display.write().await;

        // Tokens are issued under this lock, so the check is exact.
        if token != self.seq.load(Ordering::SeqCst) {
            tracing::debug!(token, "Discarding stale people response");
            return;
        }

        match result {
            Ok(records) => {
                tracing::debug!(token, count = records.len(), "People query resolved");
                display.phase = Phase::Loaded;
                display.records = records;
            }
            Err(err) => {
                tracing::warn!(token, "People query failed: {}", err);
                display.phase = Phase::Errored;
                display.records.clear();
            }
        }
    }
}
