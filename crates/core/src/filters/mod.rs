//! Client-side filters for dashboard tables.
//!
//! Every filter is an independent predicate; a table's filter state applies
//! them in sequence so the result is their conjunction. Categorical filters
//! use [`Selection`], where `"all"` switches the filter off.

mod goal_filter;
mod search;
mod selection;
mod status_filter;
mod summary_filter;

pub use goal_filter::{goal_rows, GoalFilter, GoalRow};
pub use search::SearchQuery;
pub use selection::Selection;
pub use status_filter::StatusFilter;
pub use summary_filter::SummaryFilter;
