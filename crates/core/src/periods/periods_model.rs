//! Evaluation period models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where an evaluation period is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Preparing; goals cannot be submitted yet.
    Draft,
    /// In progress. At most one period is active at a time.
    Active,
    Completed,
    Cancelled,
}

/// Domain model for an evaluation period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationPeriod {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub goal_submission_deadline: Option<NaiveDate>,
    pub status: PeriodStatus,
}

impl EvaluationPeriod {
    pub fn is_current(&self) -> bool {
        self.status == PeriodStatus::Active
    }
}

/// Periods grouped for a period selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedPeriods {
    pub current: Option<EvaluationPeriod>,
    pub upcoming: Vec<EvaluationPeriod>,
    pub past: Vec<EvaluationPeriod>,
}
