//! Paths and query strings of the Goalpost REST API.

use goalpost_core::goals::GoalQuery;

pub const GOALS: &str = "/api/v1/goals";
pub const USERS: &str = "/api/v1/users";
pub const DEPARTMENTS: &str = "/api/v1/departments";
pub const STAGES: &str = "/api/v1/stages";
pub const EVALUATION_PERIODS: &str = "/api/v1/evaluation-periods";
pub const SUPERVISOR_REVIEWS: &str = "/api/v1/supervisor-reviews";

pub fn goal(goal_id: &str) -> String {
    format!("{}/{}", GOALS, urlencoding::encode(goal_id))
}

pub fn goal_submit(goal_id: &str) -> String {
    format!("{}/submit", goal(goal_id))
}

pub fn pending_review_count(period_id: &str) -> String {
    let mut query = QueryString::default();
    query.push("periodId", period_id);
    format!("{}/pending/count{}", SUPERVISOR_REVIEWS, query)
}

/// One page of the goal list.
pub fn goal_list(query: &GoalQuery, page: u32) -> String {
    let mut params = QueryString::default();
    params.push("periodId", &query.period_id);
    params.push_opt("userId", query.user_id.as_deref());
    params.push_opt("goalCategory", query.category.map(|c| c.as_str()));
    params.push_opt("status", query.status.map(|s| s.as_str()));
    params.push("page", page);
    params.push("limit", query.limit);
    if query.include_reviews {
        params.push("includeReviews", true);
    }
    if query.include_rejection_history {
        params.push("includeRejectionHistory", true);
    }
    format!("{}{}", GOALS, params)
}

pub fn user_list(page: u32, limit: u32) -> String {
    let mut params = QueryString::default();
    params.push("page", page);
    params.push("limit", limit);
    format!("{}{}", USERS, params)
}

/// Percent-encoded `?key=value&...` suffix. Empty when no pair was pushed.
#[derive(Debug, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }
}

impl std::fmt::Display for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                separator,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}
