//! Dashboard data models.

use serde::Serialize;

use crate::goals::GoalRecord;
use crate::periods::EvaluationPeriod;
use crate::summary::UserSummary;
use crate::users::{Department, Stage, User};

/// Whose goals a dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardScope {
    /// Every user (admin view).
    Organization,
    /// Direct reports of the given supervisor.
    Subordinates { supervisor_id: String },
    /// A single user.
    User { user_id: String },
}

impl DashboardScope {
    pub fn includes(&self, user: &User) -> bool {
        match self {
            DashboardScope::Organization => true,
            DashboardScope::Subordinates { supervisor_id } => {
                user.supervisor_id() == Some(supervisor_id.as_str())
            }
            DashboardScope::User { user_id } => &user.id == user_id,
        }
    }
}

/// What to load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub scope: DashboardScope,
    /// `None` loads the current period.
    pub period_id: Option<String>,
    pub include_reviews: bool,
    pub include_rejection_history: bool,
}

impl DashboardRequest {
    pub fn new(scope: DashboardScope) -> Self {
        Self {
            scope,
            period_id: None,
            include_reviews: false,
            include_rejection_history: false,
        }
    }

    pub fn for_period(mut self, period_id: impl Into<String>) -> Self {
        self.period_id = Some(period_id.into());
        self
    }
}

/// Reference data loaded alongside goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub periods: Vec<EvaluationPeriod>,
    pub users: Vec<User>,
    pub departments: Vec<Department>,
    pub stages: Vec<Stage>,
}

/// Result of one full dashboard load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub period: EvaluationPeriod,
    pub reference: ReferenceData,
    /// Active goals of the users in scope.
    pub goals: Vec<GoalRecord>,
    /// One entry per user in scope.
    pub summaries: Vec<UserSummary>,
    pub warning: Option<String>,
}

/// `{ success, data?, error?, warning? }` shape handed to presentation code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> LoadOutcome<T> {
    pub fn ok(data: T, warning: Option<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            warning,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            warning: None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        LoadOutcome {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            warning: self.warning,
        }
    }
}
