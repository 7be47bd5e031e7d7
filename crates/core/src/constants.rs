/// Sentinel value that disables a categorical filter
pub const FILTER_ALL: &str = "all";

/// Rows per dashboard page
pub const DEFAULT_DISPLAY_PAGE_SIZE: usize = 50;

/// Records requested per API page when loading goals
pub const DEFAULT_FETCH_PAGE_SIZE: u32 = 100;

/// Upper bound on pages fetched in a single goal load
pub const MAX_FETCH_PAGES: u32 = 1_000;

/// Minimum query length before the user-summary search applies
pub const SUMMARY_SEARCH_MIN_CHARS: usize = 2;

/// Maximum number of predecessors followed when walking a resubmission chain
pub const MAX_HISTORY_DEPTH: usize = 20;

/// Quiet period before an edited goal draft is persisted
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 2_000;

/// Interval between dashboard refreshes
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Shortest allowed interval between dashboard refreshes
pub const MIN_REFRESH_INTERVAL_MS: u64 = 1_000;
