use std::collections::HashMap;

use log::debug;

use crate::goals::{GoalCategory, GoalRecord, GoalStatus};
use crate::summary::summary_model::{CategoryCounts, StatusCounts, UserSummary};
use crate::users::User;

/// Builds one summary per user in `users`, in the order of `users`.
///
/// Users without goals are kept with zero counts and no last activity.
/// Goals owned by users outside `users` are ignored.
pub fn aggregate_by_user(goals: &[GoalRecord], users: &[User]) -> Vec<UserSummary> {
    let mut by_user: HashMap<&str, Vec<&GoalRecord>> = HashMap::new();
    for goal in goals {
        by_user.entry(goal.user_id.as_str()).or_default().push(goal);
    }

    let summaries: Vec<UserSummary> = users
        .iter()
        .map(|user| {
            let user_goals = by_user.get(user.id.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            summarize(user, user_goals)
        })
        .collect();

    debug!(
        "[Summary] Aggregated {} goals into {} user summaries",
        goals.len(),
        summaries.len()
    );
    summaries
}

fn summarize(user: &User, goals: &[&GoalRecord]) -> UserSummary {
    let count_category = |category: GoalCategory| {
        goals.iter().filter(|g| g.goal_category == category).count()
    };
    let count_status = |status: GoalStatus| goals.iter().filter(|g| g.status == status).count();

    UserSummary {
        user_id: user.id.clone(),
        name: user.name.clone(),
        employee_code: user.employee_code.clone(),
        email: user.email.clone(),
        department: user.department.clone(),
        stage: user.stage.clone(),
        supervisor: user.supervisor.clone(),
        counts: CategoryCounts {
            performance: count_category(GoalCategory::Performance),
            competency: count_category(GoalCategory::Competency),
            total: goals.len(),
        },
        status_counts: StatusCounts {
            draft: count_status(GoalStatus::Draft),
            submitted: count_status(GoalStatus::Submitted),
            approved: count_status(GoalStatus::Approved),
            rejected: count_status(GoalStatus::Rejected),
        },
        last_activity: goals.iter().map(|g| g.updated_at).max(),
        goals: goals.iter().map(|g| (*g).clone()).collect(),
    }
}
