use crate::errors::Result;
use crate::goals::goals_model::{GoalLoadResult, GoalQuery, GoalRecord, GoalUpdate, NewGoal};
use crate::pagination::Paginated;
use async_trait::async_trait;

/// Trait for goal endpoints of the backend API
#[async_trait]
pub trait GoalApiTrait: Send + Sync {
    /// Fetch one page (1-based) of goals matching `query`.
    async fn list_goals(&self, query: &GoalQuery, page: u32) -> Result<Paginated<GoalRecord>>;
    async fn get_goal(&self, goal_id: &str) -> Result<GoalRecord>;
    async fn create_goal(&self, new_goal: &NewGoal) -> Result<GoalRecord>;
    async fn update_goal(&self, goal_id: &str, update: &GoalUpdate) -> Result<GoalRecord>;
    async fn submit_goal(&self, goal_id: &str) -> Result<GoalRecord>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Load every page of `query`, tolerating failures after the first page.
    async fn load_goals(&self, query: &GoalQuery) -> Result<GoalLoadResult>;
    /// Predecessors of `goal_id` along its resubmission chain, newest first.
    async fn get_goal_history(&self, goal_id: &str) -> Result<Vec<GoalRecord>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<GoalRecord>;
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<GoalRecord>;
    async fn submit_goal(&self, goal_id: &str) -> Result<GoalRecord>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}
