//! Reviews module - supervisor decisions on submitted goals.

mod reviews_model;
mod reviews_service;
mod reviews_traits;

pub use reviews_model::{ReviewAction, ReviewDecision, SupervisorReview};
pub use reviews_service::ReviewService;
pub use reviews_traits::ReviewApiTrait;
