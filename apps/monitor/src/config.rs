use std::time::Duration;

use goalpost_connect::config::parse_number;
use goalpost_connect::ApiConfig;
use goalpost_core::constants::DEFAULT_REFRESH_INTERVAL_SECS;
use goalpost_core::dashboard::{DashboardRequest, DashboardScope};
use goalpost_core::Result;

pub const ENV_PERIOD_ID: &str = "GOALPOST_PERIOD_ID";
pub const ENV_POLL_SECS: &str = "GOALPOST_POLL_SECS";
pub const ENV_SUPERVISOR_ID: &str = "GOALPOST_SUPERVISOR_ID";

pub struct Config {
    pub api: ApiConfig,
    /// `None` follows the current evaluation period.
    pub period_id: Option<String>,
    pub poll_interval: Duration,
    /// Restricts the report to this supervisor's direct reports.
    pub supervisor_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api = ApiConfig::from_lookup(&lookup)?;
        let poll_secs = parse_number(
            ENV_POLL_SECS,
            get(ENV_POLL_SECS),
            DEFAULT_REFRESH_INTERVAL_SECS,
        )?;

        Ok(Self {
            api,
            period_id: get(ENV_PERIOD_ID),
            poll_interval: Duration::from_secs(poll_secs),
            supervisor_id: get(ENV_SUPERVISOR_ID),
        })
    }

    pub fn dashboard_request(&self) -> DashboardRequest {
        let scope = match &self.supervisor_id {
            Some(supervisor_id) => DashboardScope::Subordinates {
                supervisor_id: supervisor_id.clone(),
            },
            None => DashboardScope::Organization,
        };
        DashboardRequest {
            period_id: self.period_id.clone(),
            ..DashboardRequest::new(scope)
        }
    }
}
