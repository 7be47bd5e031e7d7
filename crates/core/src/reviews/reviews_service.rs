use std::sync::Arc;

use log::{info, warn};

use crate::errors::{Result, ValidationError};
use crate::goals::{GoalRecord, GoalStatus};
use crate::pending::PendingReviewStore;
use crate::reviews::reviews_model::{ReviewDecision, SupervisorReview};
use crate::reviews::reviews_traits::ReviewApiTrait;

/// Records supervisor decisions on submitted goals.
pub struct ReviewService {
    api: Arc<dyn ReviewApiTrait>,
    pending: Option<Arc<PendingReviewStore>>,
}

impl ReviewService {
    pub fn new(api: Arc<dyn ReviewApiTrait>) -> Self {
        Self { api, pending: None }
    }

    /// Refresh `store` after every recorded decision.
    pub fn with_pending_store(mut self, store: Arc<PendingReviewStore>) -> Self {
        self.pending = Some(store);
        self
    }

    pub async fn approve(
        &self,
        goal: &GoalRecord,
        comment: Option<String>,
    ) -> Result<SupervisorReview> {
        let decision = ReviewDecision::approve(goal.id.clone(), comment);
        self.record(goal, decision).await
    }

    /// Rejects `goal`. A blank reason fails before any request is made.
    pub async fn reject(&self, goal: &GoalRecord, reason: &str) -> Result<SupervisorReview> {
        let decision = ReviewDecision::reject(goal.id.clone(), reason)?;
        self.record(goal, decision).await
    }

    async fn record(
        &self,
        goal: &GoalRecord,
        decision: ReviewDecision,
    ) -> Result<SupervisorReview> {
        if goal.status != GoalStatus::Submitted {
            return Err(ValidationError::InvalidInput(format!(
                "Goal {} is {} and cannot be reviewed",
                goal.id, goal.status
            ))
            .into());
        }

        let review = self.api.submit_review(&decision).await?;
        info!(
            "[Reviews] Goal {} marked {:?} by {}",
            goal.id, review.action, review.supervisor_id
        );

        if let Some(store) = &self.pending {
            if let Err(e) = store.refresh(&goal.period_id).await {
                warn!("[Reviews] Failed to refresh pending review count: {}", e);
            }
        }

        Ok(review)
    }
}
