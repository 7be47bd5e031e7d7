use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use goalpost_connect::GoalpostApiClient;
use goalpost_core::dashboard::{DashboardService, DashboardSession};
use goalpost_core::goals::GoalService;
use goalpost_core::pending::PendingReviewStore;

use crate::config::Config;

pub struct AppState {
    pub session: Arc<DashboardSession>,
    /// Only set when the report is scoped to a supervisor.
    pub pending_reviews: Option<Arc<PendingReviewStore>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GOALPOST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = Arc::new(GoalpostApiClient::from_config(&config.api)?);
    if !client.is_authenticated() {
        tracing::warn!("GOALPOST_API_TOKEN is not set; requests are sent unauthenticated");
    }

    let goal_service = Arc::new(GoalService::new(client.clone()));
    let dashboard_service = DashboardService::new(goal_service, client.clone(), client.clone())
        .with_fetch_page_size(config.api.page_size);

    let session = Arc::new(DashboardSession::new(
        Arc::new(dashboard_service),
        config.dashboard_request(),
    ));
    let pending_reviews = config
        .supervisor_id
        .as_ref()
        .map(|_| Arc::new(PendingReviewStore::new(client.clone())));

    Ok(Arc::new(AppState {
        session,
        pending_reviews,
    }))
}
