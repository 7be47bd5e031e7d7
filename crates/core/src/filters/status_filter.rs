use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::summary::UserSummary;

/// Classifies a user summary by the state of its goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    /// No goals at all.
    NoGoals,
    /// At least one draft.
    HasDrafts,
    /// Has goals and none of them is a draft.
    AllSubmitted,
    /// Has goals and every one of them is approved.
    AllApproved,
    /// At least one rejected goal.
    HasRejected,
}

impl StatusFilter {
    pub const CLASSIFIERS: [StatusFilter; 5] = [
        StatusFilter::NoGoals,
        StatusFilter::HasDrafts,
        StatusFilter::AllSubmitted,
        StatusFilter::AllApproved,
        StatusFilter::HasRejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::NoGoals => "no-goals",
            StatusFilter::HasDrafts => "has-drafts",
            StatusFilter::AllSubmitted => "all-submitted",
            StatusFilter::AllApproved => "all-approved",
            StatusFilter::HasRejected => "has-rejected",
        }
    }

    pub fn matches(&self, summary: &UserSummary) -> bool {
        let total = summary.counts.total;
        let status = &summary.status_counts;
        match self {
            StatusFilter::All => true,
            StatusFilter::NoGoals => total == 0,
            StatusFilter::HasDrafts => status.draft > 0,
            StatusFilter::AllSubmitted => total > 0 && status.draft == 0,
            StatusFilter::AllApproved => total > 0 && status.approved == total,
            StatusFilter::HasRejected => status.rejected > 0,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "no-goals" => Ok(StatusFilter::NoGoals),
            "has-drafts" => Ok(StatusFilter::HasDrafts),
            "all-submitted" => Ok(StatusFilter::AllSubmitted),
            "all-approved" => Ok(StatusFilter::AllApproved),
            "has-rejected" => Ok(StatusFilter::HasRejected),
            _ => Err(format!("Unknown status filter: {}", s)),
        }
    }
}
