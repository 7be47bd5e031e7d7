//! Evaluation periods - models, selection and the backend trait.

mod periods_model;
mod periods_service;

use async_trait::async_trait;

use crate::errors::Result;

pub use periods_model::{CategorizedPeriods, EvaluationPeriod, PeriodStatus};
pub use periods_service::{categorize_periods, current_period, resolve_period};

/// Trait for reading evaluation periods from the backend
#[async_trait]
pub trait PeriodApiTrait: Send + Sync {
    async fn list_periods(&self) -> Result<Vec<EvaluationPeriod>>;
}
