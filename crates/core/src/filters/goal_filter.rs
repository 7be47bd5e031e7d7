use std::collections::HashMap;

use crate::filters::search::SearchQuery;
use crate::filters::selection::Selection;
use crate::goals::{GoalCategory, GoalRecord, GoalStatus};
use crate::users::User;

/// A goal joined with its owner for the flat "all goals" table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRow<'a> {
    pub goal: &'a GoalRecord,
    pub owner: Option<&'a User>,
}

impl GoalRow<'_> {
    pub fn owner_name(&self) -> &str {
        self.owner.map(|u| u.name.as_str()).unwrap_or_default()
    }

    pub fn department_id(&self) -> Option<&str> {
        self.owner.and_then(|u| u.department_id())
    }

    pub fn department_name(&self) -> &str {
        self.owner
            .and_then(|u| u.department_name())
            .unwrap_or_default()
    }
}

/// Joins each goal with its owner, keeping goal order.
pub fn goal_rows<'a>(goals: &'a [GoalRecord], users: &'a [User]) -> Vec<GoalRow<'a>> {
    let by_id: HashMap<&str, &User> = users.iter().map(|u| (u.id.as_str(), u)).collect();
    goals
        .iter()
        .map(|goal| GoalRow {
            goal,
            owner: by_id.get(goal.user_id.as_str()).copied(),
        })
        .collect()
}

/// Filter state of the flat goal table. Search applies from the first character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalFilter {
    pub search: String,
    pub department: Selection<String>,
    pub category: Selection<GoalCategory>,
    pub status: Selection<GoalStatus>,
}

impl GoalFilter {
    pub fn apply<'a>(&self, rows: &[GoalRow<'a>]) -> Vec<GoalRow<'a>> {
        let mut result = rows.to_vec();

        let search = SearchQuery::new(&self.search, 1);
        if search.is_active() {
            result.retain(|row| {
                search.matches_any([row.owner_name(), row.department_name(), row.goal.title.as_str()])
            });
        }

        if !self.department.is_all() {
            result.retain(|row| self.department.matches_str(row.department_id()));
        }

        if !self.category.is_all() {
            result.retain(|row| self.category.matches(Some(&row.goal.goal_category)));
        }

        if !self.status.is_all() {
            result.retain(|row| self.status.matches(Some(&row.goal.status)));
        }

        result
    }
}
