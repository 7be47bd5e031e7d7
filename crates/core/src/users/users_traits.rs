use crate::errors::Result;
use crate::users::users_model::{Department, Stage, User};
use async_trait::async_trait;

/// Trait for reading the user directory from the backend
#[async_trait]
pub trait DirectoryApiTrait: Send + Sync {
    /// Every user visible to the caller, across all API pages.
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn list_stages(&self) -> Result<Vec<Stage>>;
}
