//! HTTP client for the Goalpost REST API.
//!
//! Implements the backend traits of `goalpost-core` on top of reqwest. Every
//! response is unwrapped from the `{ success, data?, error? }` envelope and
//! transport failures are converted to core errors at this boundary.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use goalpost_core::constants::MAX_FETCH_PAGES;
use goalpost_core::errors::{Error, Result};
use goalpost_core::goals::{GoalApiTrait, GoalQuery, GoalRecord, GoalUpdate, NewGoal};
use goalpost_core::pagination::Paginated;
use goalpost_core::periods::{EvaluationPeriod, PeriodApiTrait};
use goalpost_core::reviews::{ReviewApiTrait, ReviewDecision, SupervisorReview};
use goalpost_core::users::{Department, DirectoryApiTrait, Stage, User};

use crate::config::ApiConfig;
use crate::endpoints;
use crate::envelope::{ApiEnvelope, PendingCount};

/// Longest slice of a non-JSON error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the Goalpost REST API.
///
/// # Example
///
/// ```ignore
/// let client = GoalpostApiClient::new("https://goals.example.com", Some("token"))?;
/// let periods = client.list_periods().await?;
/// ```
#[derive(Debug, Clone)]
pub struct GoalpostApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
    page_size: u32,
}

impl GoalpostApiClient {
    /// Create a client with the default timeout. Without a token requests are
    /// sent unauthenticated.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self> {
        let config = ApiConfig {
            token: access_token.map(str::to_string),
            ..ApiConfig::new(base_url)
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let auth_header = match config.token.as_deref() {
            Some(token) => Some(
                HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    Error::InvalidConfigValue(format!("Invalid access token format: {}", e))
                })?,
            ),
            None => None,
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
            page_size: config.page_size.max(1),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_header.is_some()
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, path, None)
            .await?
            .ok_or_else(|| Error::api("Response contained no data"))
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.send(Method::POST, path, Some(body))
            .await?
            .ok_or_else(|| Error::api("Response contained no data"))
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.send(Method::PUT, path, Some(body))
            .await?
            .ok_or_else(|| Error::api("Response contained no data"))
    }

    async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<(), T>(Method::PATCH, path, None)
            .await?
            .ok_or_else(|| Error::api("Response contained no data"))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send::<(), serde_json::Value>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    /// Sends a request and unwraps the envelope. `Ok(None)` means the backend
    /// reported success without data.
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[GoalpostApi] {} {}", method, url);

        let mut request = self.client.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("{}: {}", url, e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        parse_body(status, &body)
    }
}

/// Maps a status code and body to the envelope's data or a core error.
fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.error_message())
            .unwrap_or_else(|| {
                let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
                if snippet.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    snippet
                }
            });
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(message));
        }
        return Err(Error::Api {
            status: Some(status.as_u16()),
            message,
        });
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body).map_err(|e| {
        Error::Unexpected(format!(
            "Failed to parse response: {} - {}",
            e,
            body.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>()
        ))
    })?;
    envelope.into_data()
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl GoalApiTrait for GoalpostApiClient {
    async fn list_goals(&self, query: &GoalQuery, page: u32) -> Result<Paginated<GoalRecord>> {
        self.get(&endpoints::goal_list(query, page)).await
    }

    async fn get_goal(&self, goal_id: &str) -> Result<GoalRecord> {
        self.get(&endpoints::goal(goal_id)).await
    }

    async fn create_goal(&self, new_goal: &NewGoal) -> Result<GoalRecord> {
        let goal: GoalRecord = self.post(endpoints::GOALS, new_goal).await?;
        info!("[GoalpostApi] Created goal {}", goal.id);
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, update: &GoalUpdate) -> Result<GoalRecord> {
        self.put(&endpoints::goal(goal_id), update).await
    }

    async fn submit_goal(&self, goal_id: &str) -> Result<GoalRecord> {
        self.patch(&endpoints::goal_submit(goal_id)).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.delete(&endpoints::goal(goal_id)).await?;
        info!("[GoalpostApi] Deleted goal {}", goal_id);
        Ok(())
    }
}

#[async_trait]
impl DirectoryApiTrait for GoalpostApiClient {
    /// Walks the user pages one after another until the last page.
    async fn list_users(&self) -> Result<Vec<User>> {
        let mut users = Vec::new();
        let mut page = 1;
        loop {
            let batch: Paginated<User> =
                self.get(&endpoints::user_list(page, self.page_size)).await?;
            let pages = batch.pages.max(1);
            users.extend(batch.items);
            if page >= pages || page >= MAX_FETCH_PAGES {
                break;
            }
            page += 1;
        }

        info!("[GoalpostApi] Fetched {} users", users.len());
        Ok(users)
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.get(endpoints::DEPARTMENTS).await
    }

    async fn list_stages(&self) -> Result<Vec<Stage>> {
        self.get(endpoints::STAGES).await
    }
}

#[async_trait]
impl PeriodApiTrait for GoalpostApiClient {
    async fn list_periods(&self) -> Result<Vec<EvaluationPeriod>> {
        self.get(endpoints::EVALUATION_PERIODS).await
    }
}

#[async_trait]
impl ReviewApiTrait for GoalpostApiClient {
    async fn submit_review(&self, decision: &ReviewDecision) -> Result<SupervisorReview> {
        let review: SupervisorReview = self.post(endpoints::SUPERVISOR_REVIEWS, decision).await?;
        info!(
            "[GoalpostApi] Recorded {:?} review for goal {}",
            review.action, review.goal_id
        );
        Ok(review)
    }

    async fn count_pending_reviews(&self, period_id: &str) -> Result<u64> {
        let pending: PendingCount = self.get(&endpoints::pending_review_count(period_id)).await?;
        Ok(pending.count)
    }
}
