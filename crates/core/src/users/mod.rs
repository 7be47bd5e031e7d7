//! Users module - directory models and traits.

mod users_model;
mod users_traits;

pub use users_model::{Department, Stage, User, UserRef};
pub use users_traits::DirectoryApiTrait;
