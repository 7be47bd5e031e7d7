use std::collections::HashSet;
use std::sync::Arc;

use log::info;

use crate::constants::DEFAULT_FETCH_PAGE_SIZE;
use crate::dashboard::dashboard_model::{
    DashboardData, DashboardRequest, DashboardScope, ReferenceData,
};
use crate::errors::Result;
use crate::goals::{GoalQuery, GoalRecord, GoalServiceTrait};
use crate::history::active_goals;
use crate::periods::{resolve_period, PeriodApiTrait};
use crate::summary::aggregate_by_user;
use crate::users::{DirectoryApiTrait, User};

/// Runs the load → aggregate pipeline behind the admin and supervisor dashboards.
pub struct DashboardService {
    goals: Arc<dyn GoalServiceTrait>,
    directory: Arc<dyn DirectoryApiTrait>,
    periods: Arc<dyn PeriodApiTrait>,
    fetch_page_size: u32,
}

impl DashboardService {
    pub fn new(
        goals: Arc<dyn GoalServiceTrait>,
        directory: Arc<dyn DirectoryApiTrait>,
        periods: Arc<dyn PeriodApiTrait>,
    ) -> Self {
        Self {
            goals,
            directory,
            periods,
            fetch_page_size: DEFAULT_FETCH_PAGE_SIZE,
        }
    }

    pub fn with_fetch_page_size(mut self, page_size: u32) -> Self {
        self.fetch_page_size = page_size.max(1);
        self
    }

    /// Loads periods, users, departments and stages concurrently.
    pub async fn load_reference_data(&self) -> Result<ReferenceData> {
        let (periods, users, departments, stages) = tokio::try_join!(
            self.periods.list_periods(),
            self.directory.list_users(),
            self.directory.list_departments(),
            self.directory.list_stages(),
        )?;

        Ok(ReferenceData {
            periods,
            users,
            departments,
            stages,
        })
    }

    pub async fn load(&self, request: &DashboardRequest) -> Result<DashboardData> {
        let reference = self.load_reference_data().await?;
        let period = resolve_period(&reference.periods, request.period_id.as_deref())?;

        let mut query = GoalQuery::for_period(period.id.clone()).with_limit(self.fetch_page_size);
        if let DashboardScope::User { user_id } = &request.scope {
            query = query.with_user(user_id.clone());
        }
        query.include_reviews = request.include_reviews;
        query.include_rejection_history = request.include_rejection_history;

        let loaded = self.goals.load_goals(&query).await?;

        let users: Vec<User> = reference
            .users
            .iter()
            .filter(|u| request.scope.includes(u))
            .cloned()
            .collect();
        let in_scope: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        let goals: Vec<GoalRecord> = active_goals(loaded.goals)
            .into_iter()
            .filter(|g| in_scope.contains(g.user_id.as_str()))
            .collect();
        let summaries = aggregate_by_user(&goals, &users);

        info!(
            "[Dashboard] Period '{}': {} users, {} active goals{}",
            period.name,
            summaries.len(),
            goals.len(),
            if loaded.warning.is_some() { " (incomplete)" } else { "" }
        );

        Ok(DashboardData {
            period,
            reference,
            goals,
            summaries,
            warning: loaded.warning,
        })
    }
}
