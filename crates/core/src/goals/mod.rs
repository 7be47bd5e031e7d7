//! Goals module - domain models, loader, services, and traits.

mod goals_loader;
mod goals_model;
mod goals_service;
mod goals_traits;


pub use goals_loader::{GoalLoader, LoaderConfig};
pub use goals_model::{
    GoalCategory, GoalLoadResult, GoalQuery, GoalRecord, GoalStatus, GoalUpdate, NewGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalApiTrait, GoalServiceTrait};
