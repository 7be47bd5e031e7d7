use crate::errors::Result;
use crate::reviews::reviews_model::{ReviewDecision, SupervisorReview};
use async_trait::async_trait;

/// Trait for supervisor review operations against the backend
#[async_trait]
pub trait ReviewApiTrait: Send + Sync {
    async fn submit_review(&self, decision: &ReviewDecision) -> Result<SupervisorReview>;

    /// Number of goals in `period_id` waiting for the caller's review.
    async fn count_pending_reviews(&self, period_id: &str) -> Result<u64>;
}
