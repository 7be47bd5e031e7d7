//! Background refresh and compliance reporting.
//!
//! The dashboard session is polled on a fixed interval; every committed load
//! is summarised in one log line per status bucket.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use goalpost_core::dashboard::{DashboardSession, RefreshHandle};
use goalpost_core::filters::StatusFilter;
use goalpost_core::summary::ComplianceOverview;

use crate::main_lib::AppState;

/// Starts polling the session. Dropping the returned handle stops it.
pub fn start_refresh_scheduler(
    state: &Arc<AppState>,
    every: std::time::Duration,
) -> RefreshHandle {
    info!("Refresh scheduler started ({}s interval)", every.as_secs());
    RefreshHandle::spawn(state.session.clone(), every)
}

/// Logs a report after every committed load until the session is closed.
///
/// `commits` must come from [`DashboardSession::subscribe`] before the first
/// refresh starts, or that load goes unreported. Returns the number of reports.
pub async fn report_loop(state: Arc<AppState>, mut commits: watch::Receiver<u64>) -> usize {
    let mut reports = 0;
    while commits.changed().await.is_ok() {
        report(&state).await;
        reports += 1;
        if state.session.is_closed() {
            break;
        }
    }
    debug!("Report loop finished after {} report(s)", reports);
    reports
}

async fn report(state: &Arc<AppState>) {
    let session = &state.session;
    if let Some(error) = session.error().await {
        warn!("Dashboard refresh failed: {}", error);
        return;
    }
    if let Some(warning) = session.warning().await {
        warn!("Dashboard data is incomplete: {}", warning);
    }

    let Some(period) = session.period().await else {
        return;
    };
    let overview = session.overview().await;
    info!("{}", format_overview(&period.name, &overview));

    if let Some(store) = &state.pending_reviews {
        match store.refresh(&period.id).await {
            Ok(count) => info!("{} goal(s) waiting for review", count),
            Err(e) => warn!("Failed to refresh pending review count: {}", e),
        }
    }

    log_json_snapshot(session).await;
}

async fn log_json_snapshot(session: &DashboardSession) {
    let page = session.current_page().await;
    match serde_json::to_string(&page) {
        Ok(json) => debug!("First page: {}", json),
        Err(e) => debug!("Failed to serialize page: {}", e),
    }
}

pub fn format_overview(period_name: &str, overview: &ComplianceOverview) -> String {
    let buckets: Vec<String> = StatusFilter::CLASSIFIERS
        .iter()
        .map(|filter| format!("{}={}", filter, overview.count(*filter)))
        .collect();
    format!(
        "[{}] {} users, {:.1}% fully submitted ({})",
        period_name,
        overview.total_users,
        overview.submission_rate(),
        buckets.join(", ")
    )
}
