use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{watch, RwLock};

use crate::dashboard::dashboard_model::{DashboardData, DashboardRequest, LoadOutcome};
use crate::dashboard::dashboard_service::DashboardService;
use crate::dashboard::view::DashboardView;
use crate::filters::{Selection, StatusFilter};
use crate::goals::GoalCategory;
use crate::pagination::Page;
use crate::periods::EvaluationPeriod;
use crate::summary::{ComplianceOverview, UserSummary};

#[derive(Debug, Default)]
pub(super) struct SessionState {
    data: Option<DashboardData>,
    view: DashboardView,
    error: Option<String>,
    warning: Option<String>,
    loading: bool,
}

/// A mounted dashboard: the latest loaded data plus its table state.
///
/// Only the most recent load may commit. A load that finishes after a newer
/// one started, or after [`close`](Self::close), is discarded.
pub struct DashboardSession {
    service: Arc<DashboardService>,
    request: RwLock<DashboardRequest>,
    pub(super) state: RwLock<SessionState>,
    generation: AtomicU64,
    closed: AtomicBool,
    commits: watch::Sender<u64>,
}

impl DashboardSession {
    pub fn new(service: Arc<DashboardService>, request: DashboardRequest) -> Self {
        Self {
            service,
            request: RwLock::new(request),
            state: RwLock::new(SessionState::default()),
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            commits: watch::channel(0).0,
        }
    }

    /// Loads the dashboard and commits the result.
    ///
    /// Returns `None` when the result was discarded because the session was
    /// closed or a newer load was started meanwhile.
    pub async fn refetch(&self) -> Option<LoadOutcome<()>> {
        if self.is_closed() {
            return None;
        }
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = self.request.read().await.clone();
        self.state.write().await.loading = true;

        let result = self.service.load(&request).await;

        // Checked under the lock: `close` may run while we wait for it.
        let mut state = self.state.write().await;
        if !self.is_current(ticket) {
            debug!("[Dashboard] Discarding load #{} (superseded or closed)", ticket);
            return None;
        }
        state.loading = false;
        let outcome = match result {
            Ok(data) => {
                let warning = data.warning.clone();
                state.view.replace_data(data.summaries.clone());
                state.data = Some(data);
                state.error = None;
                state.warning = warning.clone();
                LoadOutcome::ok((), warning)
            }
            Err(e) => {
                warn!("[Dashboard] Load failed: {}", e);
                let message = e.to_string();
                state.error = Some(message.clone());
                LoadOutcome::failed(message)
            }
        };
        self.commits.send_modify(|count| *count += 1);
        drop(state);
        Some(outcome)
    }

    /// Notifies every time a load result (success or failure) is committed.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.commits.subscribe()
    }

    /// Stops committing results. Loads still in flight are discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn is_current(&self, ticket: u64) -> bool {
        !self.is_closed() && self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Switches period. Takes effect on the next [`refetch`](Self::refetch).
    pub async fn set_period(&self, period_id: Option<String>) {
        let mut request = self.request.write().await;
        if request.period_id != period_id {
            request.period_id = period_id;
            self.state.write().await.view.set_page(1);
        }
    }

    pub async fn set_search(&self, search: impl Into<String>) {
        self.state.write().await.view.set_search(search);
    }

    pub async fn set_department(&self, department: Selection<String>) {
        self.state.write().await.view.set_department(department);
    }

    pub async fn set_stage(&self, stage: Selection<String>) {
        self.state.write().await.view.set_stage(stage);
    }

    pub async fn set_status(&self, status: StatusFilter) {
        self.state.write().await.view.set_status(status);
    }

    pub async fn set_category(&self, category: Selection<GoalCategory>) {
        self.state.write().await.view.set_category(category);
    }

    pub async fn set_page(&self, page: usize) {
        self.state.write().await.view.set_page(page);
    }

    pub async fn dismiss_error(&self) {
        self.state.write().await.error = None;
    }

    pub async fn current_page(&self) -> Page<UserSummary> {
        self.state.read().await.view.current_page()
    }

    pub async fn overview(&self) -> ComplianceOverview {
        self.state.read().await.view.overview()
    }

    pub async fn period(&self) -> Option<EvaluationPeriod> {
        self.state
            .read()
            .await
            .data
            .as_ref()
            .map(|d| d.period.clone())
    }

    pub async fn data(&self) -> Option<DashboardData> {
        self.state.read().await.data.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn warning(&self) -> Option<String> {
        self.state.read().await.warning.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
