//! Supervisor review models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Decision a supervisor records against a submitted goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Pending,
    Approved,
    Rejected,
}

/// Approval or rejection record referencing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorReview {
    pub id: String,
    pub goal_id: String,
    pub period_id: String,
    pub supervisor_id: String,
    pub action: ReviewAction,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// A validated review decision, ready to be sent to the backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub goal_id: String,
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviewDecision {
    pub fn approve(goal_id: impl Into<String>, comment: Option<String>) -> Self {
        Self {
            goal_id: goal_id.into(),
            action: ReviewAction::Approved,
            comment: comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }

    /// A rejection must carry a non-blank reason.
    pub fn reject(goal_id: impl Into<String>, reason: &str) -> Result<Self> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::MissingField("comment".to_string()).into());
        }
        Ok(Self {
            goal_id: goal_id.into(),
            action: ReviewAction::Rejected,
            comment: Some(reason.to_string()),
        })
    }
}
