use crate::constants::SUMMARY_SEARCH_MIN_CHARS;
use crate::filters::search::SearchQuery;
use crate::filters::selection::Selection;
use crate::filters::status_filter::StatusFilter;
use crate::goals::GoalCategory;
use crate::summary::UserSummary;

/// Filter state of the user-summary table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryFilter {
    pub search: String,
    pub department: Selection<String>,
    pub stage: Selection<String>,
    pub status: StatusFilter,
    /// Keeps users with at least one goal in the category.
    pub category: Selection<GoalCategory>,
}

impl SummaryFilter {
    /// Applies every filter in turn, each narrowing the previous result.
    pub fn apply<'a>(&self, summaries: &'a [UserSummary]) -> Vec<&'a UserSummary> {
        let mut result: Vec<&UserSummary> = summaries.iter().collect();

        let search = SearchQuery::new(&self.search, SUMMARY_SEARCH_MIN_CHARS);
        if search.is_active() {
            result.retain(|s| {
                search.matches_any([s.name.as_str(), s.employee_code.as_str(), s.email.as_str()])
            });
        }

        if !self.department.is_all() {
            result.retain(|s| self.department.matches_str(s.department_id()));
        }

        if !self.stage.is_all() {
            result.retain(|s| self.stage.matches_str(s.stage_id()));
        }

        if self.status != StatusFilter::All {
            result.retain(|s| self.status.matches(s));
        }

        if let Selection::Only(category) = self.category {
            result.retain(|s| s.counts.get(category) > 0);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{GoalRecord, GoalStatus};
    use crate::history::active_goals;
    use crate::summary::aggregate_by_user;
    use crate::users::{Department, Stage, User};
    use chrono::{TimeZone, Utc};

    fn user(id: &str, name: &str, department: &str, stage: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            employee_code: format!("EMP-{}", id),
            email: format!("{}@example.com", name.to_lowercase()),
            department: Some(Department {
                id: department.to_string(),
                name: department.to_uppercase(),
                description: None,
            }),
            stage: Some(Stage {
                id: stage.to_string(),
                name: stage.to_uppercase(),
                description: None,
            }),
            supervisor: None,
        }
    }

    fn goal(
        id: &str,
        user_id: &str,
        category: GoalCategory,
        status: GoalStatus,
        previous: Option<&str>,
    ) -> GoalRecord {
        let at = Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap();
        GoalRecord {
            id: id.to_string(),
            user_id: user_id.to_string(),
            period_id: "p-1".to_string(),
            goal_category: category,
            status,
            weight: 30.0,
            title: id.to_string(),
            description: None,
            achievement_criteria: None,
            previous_goal_id: previous.map(str::to_string),
            created_at: at,
            updated_at: at,
            approved_at: None,
            approved_by: None,
            supervisor_review: None,
            rejection_history: None,
        }
    }

    /// A: one draft + one approved. B: nothing. C: three goals rejected and
    /// resubmitted as drafts.
    fn scenario() -> Vec<UserSummary> {
        let users = vec![
            user("a", "Aoki", "sales", "s1"),
            user("b", "Baba", "sales", "s2"),
            user("c", "Chiba", "dev", "s1"),
        ];
        let mut goals = vec![
            goal("a-1", "a", GoalCategory::Performance, GoalStatus::Draft, None),
            goal("a-2", "a", GoalCategory::Competency, GoalStatus::Approved, None),
        ];
        for i in 1..=3 {
            let rejected = format!("c-{}-old", i);
            goals.push(goal(&rejected, "c", GoalCategory::Performance, GoalStatus::Rejected, None));
            goals.push(goal(
                &format!("c-{}", i),
                "c",
                GoalCategory::Performance,
                GoalStatus::Draft,
                Some(&rejected),
            ));
        }

        aggregate_by_user(&active_goals(goals), &users)
    }

    fn ids(result: &[&UserSummary]) -> Vec<String> {
        result.iter().map(|s| s.user_id.clone()).collect()
    }

    fn with_status(status: StatusFilter) -> SummaryFilter {
        SummaryFilter {
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_status_filters() {
        let summaries = scenario();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[2].status_counts.draft, 3);
        assert_eq!(summaries[2].status_counts.rejected, 0);

        assert_eq!(ids(&with_status(StatusFilter::HasDrafts).apply(&summaries)), vec!["a", "c"]);
        assert_eq!(ids(&with_status(StatusFilter::NoGoals).apply(&summaries)), vec!["b"]);
        assert!(with_status(StatusFilter::AllApproved).apply(&summaries).is_empty());
        assert!(with_status(StatusFilter::AllSubmitted).apply(&summaries).is_empty());
        assert!(with_status(StatusFilter::HasRejected).apply(&summaries).is_empty());
        assert_eq!(with_status(StatusFilter::All).apply(&summaries).len(), 3);
    }

    #[test]
    fn test_search_needs_two_characters() {
        let summaries = scenario();
        let filter = |search: &str| SummaryFilter {
            search: search.to_string(),
            ..Default::default()
        };

        assert_eq!(filter("").apply(&summaries).len(), 3);
        assert_eq!(filter("b").apply(&summaries).len(), 3);
        assert_eq!(ids(&filter("BAB").apply(&summaries)), vec!["b"]);
        assert_eq!(ids(&filter("emp-c").apply(&summaries)), vec!["c"]);
        assert_eq!(ids(&filter("chiba@").apply(&summaries)), vec!["c"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let summaries = scenario();
        let filter = SummaryFilter {
            department: Selection::id("sales"),
            stage: Selection::id("s1"),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&summaries)), vec!["a"]);

        let filter = SummaryFilter {
            department: Selection::id("sales"),
            status: StatusFilter::HasDrafts,
            category: Selection::Only(GoalCategory::Competency),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&summaries)), vec!["a"]);
    }

    #[test]
    fn test_category_filter_requires_goal_in_category() {
        let summaries = scenario();
        let filter = SummaryFilter {
            category: Selection::Only(GoalCategory::Competency),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&summaries)), vec!["a"]);
    }
}
