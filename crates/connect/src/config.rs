use std::time::Duration;

use goalpost_core::constants::DEFAULT_FETCH_PAGE_SIZE;
use goalpost_core::errors::{Error, Result};

pub const ENV_API_URL: &str = "GOALPOST_API_URL";
pub const ENV_API_TOKEN: &str = "GOALPOST_API_TOKEN";
pub const ENV_API_TIMEOUT_SECS: &str = "GOALPOST_API_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "GOALPOST_PAGE_SIZE";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Goalpost REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Requests go out unauthenticated when no token is set.
    pub token: Option<String>,
    pub timeout: Duration,
    /// Page size hint for paginated collections.
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_FETCH_PAGE_SIZE,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a key to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url =
            get(ENV_API_URL).ok_or_else(|| Error::MissingConfigKey(ENV_API_URL.to_string()))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_API_URL, base_url
            )));
        }

        let timeout_secs = parse_number(
            ENV_API_TIMEOUT_SECS,
            get(ENV_API_TIMEOUT_SECS),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let page_size = parse_number(ENV_PAGE_SIZE, get(ENV_PAGE_SIZE), DEFAULT_FETCH_PAGE_SIZE)?;

        Ok(Self {
            base_url,
            token: get(ENV_API_TOKEN),
            timeout: Duration::from_secs(timeout_secs),
            page_size,
        })
    }
}

/// Parses a positive number, falling back to `default` when the key is unset.
pub fn parse_number<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(Error::InvalidConfigValue(format!(
            "{} must be a positive number, got '{}'",
            key, raw
        ))),
    }
}
