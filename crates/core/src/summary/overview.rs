use serde::Serialize;

use crate::filters::StatusFilter;
use crate::summary::summary_model::{StatusCounts, UserSummary};

/// Headline numbers for a set of user summaries.
///
/// `all_submitted` and `has_drafts` partition the users that have goals;
/// the other buckets may overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceOverview {
    pub total_users: usize,
    pub no_goals: usize,
    pub has_drafts: usize,
    pub all_submitted: usize,
    pub all_approved: usize,
    pub has_rejected: usize,
    /// Goal status totals across all users.
    pub goals: StatusCounts,
}

impl ComplianceOverview {
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a UserSummary>,
    {
        let mut overview = ComplianceOverview::default();
        for summary in summaries {
            overview.total_users += 1;
            for filter in StatusFilter::CLASSIFIERS {
                if filter.matches(summary) {
                    *overview.bucket_mut(filter) += 1;
                }
            }
            overview.goals.draft += summary.status_counts.draft;
            overview.goals.submitted += summary.status_counts.submitted;
            overview.goals.approved += summary.status_counts.approved;
            overview.goals.rejected += summary.status_counts.rejected;
        }
        overview
    }

    pub fn count(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total_users,
            StatusFilter::NoGoals => self.no_goals,
            StatusFilter::HasDrafts => self.has_drafts,
            StatusFilter::AllSubmitted => self.all_submitted,
            StatusFilter::AllApproved => self.all_approved,
            StatusFilter::HasRejected => self.has_rejected,
        }
    }

    /// Share of users (0–100) whose goals are all submitted.
    pub fn submission_rate(&self) -> f64 {
        if self.total_users == 0 {
            return 0.0;
        }
        self.all_submitted as f64 * 100.0 / self.total_users as f64
    }

    fn bucket_mut(&mut self, filter: StatusFilter) -> &mut usize {
        match filter {
            StatusFilter::All => &mut self.total_users,
            StatusFilter::NoGoals => &mut self.no_goals,
            StatusFilter::HasDrafts => &mut self.has_drafts,
            StatusFilter::AllSubmitted => &mut self.all_submitted,
            StatusFilter::AllApproved => &mut self.all_approved,
            StatusFilter::HasRejected => &mut self.has_rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::CategoryCounts;

    fn summary(id: &str, status_counts: StatusCounts) -> UserSummary {
        UserSummary {
            user_id: id.to_string(),
            name: id.to_string(),
            employee_code: String::new(),
            email: String::new(),
            department: None,
            stage: None,
            supervisor: None,
            counts: CategoryCounts {
                performance: status_counts.sum(),
                competency: 0,
                total: status_counts.sum(),
            },
            status_counts,
            last_activity: None,
            goals: Vec::new(),
        }
    }

    #[test]
    fn test_overview_counts_each_bucket() {
        let summaries = vec![
            summary("a", StatusCounts { draft: 1, approved: 1, ..Default::default() }),
            summary("b", StatusCounts::default()),
            summary("c", StatusCounts { approved: 2, ..Default::default() }),
            summary("d", StatusCounts { submitted: 1, rejected: 1, ..Default::default() }),
        ];

        let overview = ComplianceOverview::from_summaries(&summaries);

        assert_eq!(overview.total_users, 4);
        assert_eq!(overview.no_goals, 1);
        assert_eq!(overview.has_drafts, 1);
        assert_eq!(overview.all_submitted, 2);
        assert_eq!(overview.all_approved, 1);
        assert_eq!(overview.has_rejected, 1);
        assert_eq!(overview.goals.sum(), 6);
        assert_eq!(overview.count(StatusFilter::All), 4);
        assert!((overview.submission_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_overview() {
        let overview = ComplianceOverview::from_summaries(&[]);
        assert_eq!(overview, ComplianceOverview::default());
        assert_eq!(overview.submission_rate(), 0.0);
    }
}
