use std::fmt;
use std::str::FromStr;

use crate::constants::FILTER_ALL;

/// A categorical filter value where `"all"` disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `All` matches anything, including a missing value.
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == Some(expected),
        }
    }
}

impl Selection<String> {
    /// Parses a raw id where `"all"` (or an empty string) disables the filter.
    pub fn id(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(FILTER_ALL) {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn matches_str(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parses `"all"` as [`Selection::All`] and anything else through `T`.
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        if raw.trim().eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(Selection::All);
        }
        raw.trim().parse().map(Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(FILTER_ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}
