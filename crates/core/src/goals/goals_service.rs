use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_loader::{GoalLoader, LoaderConfig};
use crate::goals::goals_model::{GoalLoadResult, GoalQuery, GoalRecord, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalApiTrait, GoalServiceTrait};
use crate::history::ChainWalk;

pub struct GoalService {
    api: Arc<dyn GoalApiTrait>,
    loader: GoalLoader,
}

impl GoalService {
    pub fn new(api: Arc<dyn GoalApiTrait>) -> Self {
        Self::with_config(api, LoaderConfig::default())
    }

    pub fn with_config(api: Arc<dyn GoalApiTrait>, config: LoaderConfig) -> Self {
        GoalService {
            loader: GoalLoader::new(api.clone(), config),
            api,
        }
    }
}

fn validate_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 || weight > 100.0 {
        return Err(ValidationError::InvalidInput(format!(
            "Weight must be greater than 0 and at most 100, got {}",
            weight
        ))
        .into());
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    Ok(())
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn load_goals(&self, query: &GoalQuery) -> Result<GoalLoadResult> {
        self.loader.load_all(query).await
    }

    async fn get_goal_history(&self, goal_id: &str) -> Result<Vec<GoalRecord>> {
        let mut goal = self.api.get_goal(goal_id).await?;

        if let Some(history) = goal.rejection_history.take() {
            debug!("[GoalService] Using embedded history for goal {}", goal_id);
            return Ok(history);
        }

        let mut walk = ChainWalk::new(&goal);
        while let Some(id) = walk.next_id() {
            match self.api.get_goal(&id).await {
                Ok(previous) => walk.push(previous),
                Err(Error::NotFound(_)) => {
                    warn!(
                        "[GoalService] Predecessor {} of goal {} no longer exists",
                        id, goal_id
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(walk.finish())
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<GoalRecord> {
        validate_title(&new_goal.title)?;
        validate_weight(new_goal.weight)?;
        self.api.create_goal(&new_goal).await
    }

    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<GoalRecord> {
        if update.is_empty() {
            return Err(ValidationError::InvalidInput("Nothing to update".to_string()).into());
        }
        if let Some(title) = &update.title {
            validate_title(title)?;
        }
        if let Some(weight) = update.weight {
            validate_weight(weight)?;
        }
        self.api.update_goal(goal_id, &update).await
    }

    async fn submit_goal(&self, goal_id: &str) -> Result<GoalRecord> {
        self.api.submit_goal(goal_id).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.api.delete_goal(goal_id).await
    }
}
