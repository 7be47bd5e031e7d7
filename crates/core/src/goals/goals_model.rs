//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_FETCH_PAGE_SIZE;
use crate::reviews::SupervisorReview;

/// Category a goal is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Performance,
    Competency,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 2] = [GoalCategory::Performance, GoalCategory::Competency];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Performance => "performance",
            GoalCategory::Competency => "competency",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "performance" => Ok(GoalCategory::Performance),
            "competency" => Ok(GoalCategory::Competency),
            _ => Err(format!("Unknown goal category: {}", s)),
        }
    }
}

/// Lifecycle status of a goal record.
///
/// `draft -> submitted -> approved`, or `submitted -> rejected`, after which a
/// new draft is created that points back at the rejected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::Draft,
        GoalStatus::Submitted,
        GoalStatus::Approved,
        GoalStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Draft => "draft",
            GoalStatus::Submitted => "submitted",
            GoalStatus::Approved => "approved",
            GoalStatus::Rejected => "rejected",
        }
    }

    /// Whether the owner may still edit the record.
    pub fn is_editable(&self) -> bool {
        matches!(self, GoalStatus::Draft)
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(GoalStatus::Draft),
            "submitted" => Ok(GoalStatus::Submitted),
            "approved" => Ok(GoalStatus::Approved),
            "rejected" => Ok(GoalStatus::Rejected),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

/// Domain model representing a goal record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub user_id: String,
    pub period_id: String,
    pub goal_category: GoalCategory,
    pub status: GoalStatus,
    pub weight: f64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievement_criteria: Option<String>,
    /// The rejected record this draft was resubmitted from.
    #[serde(default)]
    pub previous_goal_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<String>,
    /// Embedded when the query sets `include_reviews`.
    #[serde(default)]
    pub supervisor_review: Option<SupervisorReview>,
    /// Embedded when the query sets `include_rejection_history`, newest first.
    #[serde(default)]
    pub rejection_history: Option<Vec<GoalRecord>>,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub period_id: String,
    pub goal_category: GoalCategory,
    pub weight: f64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_criteria: Option<String>,
    /// Set when resubmitting after a rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_goal_id: Option<String>,
}

/// Partial update of a draft goal. `None` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_criteria: Option<String>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.achievement_criteria.is_none()
    }
}

/// Query for goal records in an evaluation period.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalQuery {
    pub period_id: String,
    pub user_id: Option<String>,
    pub category: Option<GoalCategory>,
    pub status: Option<GoalStatus>,
    /// Page size hint passed to the backend.
    pub limit: u32,
    /// Ask the backend to embed the supervisor review on each record.
    pub include_reviews: bool,
    /// Ask the backend to embed each record's rejection chain.
    pub include_rejection_history: bool,
}

impl GoalQuery {
    pub fn for_period(period_id: impl Into<String>) -> Self {
        Self {
            period_id: period_id.into(),
            user_id: None,
            category: None,
            status: None,
            limit: DEFAULT_FETCH_PAGE_SIZE,
            include_reviews: false,
            include_rejection_history: false,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn with_reviews(mut self) -> Self {
        self.include_reviews = true;
        self
    }

    pub fn with_rejection_history(mut self) -> Self {
        self.include_rejection_history = true;
        self
    }
}

/// Result of loading every page of a goal query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalLoadResult {
    pub goals: Vec<GoalRecord>,
    pub total_pages: u32,
    pub pages_failed: u32,
    /// Set when some pages could not be fetched and `goals` is incomplete.
    pub warning: Option<String>,
}

impl GoalLoadResult {
    pub fn is_complete(&self) -> bool {
        self.pages_failed == 0
    }
}
