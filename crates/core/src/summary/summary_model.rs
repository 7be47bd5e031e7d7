//! Per-user goal summaries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::goals::{GoalCategory, GoalRecord, GoalStatus};
use crate::users::{Department, Stage, UserRef};

/// Goal count by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub performance: usize,
    pub competency: usize,
    pub total: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: GoalCategory) -> usize {
        match category {
            GoalCategory::Performance => self.performance,
            GoalCategory::Competency => self.competency,
        }
    }
}

/// Goal count by lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub draft: usize,
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: GoalStatus) -> usize {
        match status {
            GoalStatus::Draft => self.draft,
            GoalStatus::Submitted => self.submitted,
            GoalStatus::Approved => self.approved,
            GoalStatus::Rejected => self.rejected,
        }
    }

    pub fn sum(&self) -> usize {
        self.draft + self.submitted + self.approved + self.rejected
    }
}

/// Derived view of one user's goals in a period. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub department: Option<Department>,
    pub stage: Option<Stage>,
    pub supervisor: Option<UserRef>,
    pub counts: CategoryCounts,
    pub status_counts: StatusCounts,
    /// Latest `updated_at` among the user's goals.
    pub last_activity: Option<DateTime<Utc>>,
    pub goals: Vec<GoalRecord>,
}

impl UserSummary {
    pub fn department_id(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.id.as_str())
    }

    pub fn stage_id(&self) -> Option<&str> {
        self.stage.as_ref().map(|s| s.id.as_str())
    }

    pub fn has_goals(&self) -> bool {
        self.counts.total > 0
    }
}
