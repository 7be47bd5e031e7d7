//! Dashboard module - loading, aggregation and table state for the admin and
//! supervisor goal dashboards.

mod dashboard_model;
mod dashboard_service;
mod refresh;
mod session;
mod view;

#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_model::{
    DashboardData, DashboardRequest, DashboardScope, LoadOutcome, ReferenceData,
};
pub use dashboard_service::DashboardService;
pub use refresh::RefreshHandle;
pub use session::DashboardSession;
pub use view::DashboardView;
