use crate::errors::Result;
use async_trait::async_trait;

/// Persists a draft value for the auto-save worker.
#[async_trait]
pub trait DraftSaver<T>: Send + Sync {
    async fn save(&self, value: &T) -> Result<()>;
}
