//! Response envelope of the Goalpost REST API.
//!
//! Every response body has the shape `{ success, data?, error? }`. `data` is
//! only trusted after `success` has been checked.

use serde::Deserialize;

use goalpost_core::errors::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Error text reported by the backend, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|m| !m.trim().is_empty())
    }

    /// Checks `success` and returns `data`, which may be absent.
    pub fn into_data(self) -> Result<Option<T>> {
        if !self.success {
            let message = self
                .error_message()
                .unwrap_or_else(|| "Request was not successful".to_string());
            return Err(Error::api(message));
        }
        Ok(self.data)
    }

    /// Like [`into_data`](Self::into_data) but requires `data` to be present.
    pub fn into_required(self) -> Result<T> {
        self.into_data()?
            .ok_or_else(|| Error::api("Response contained no data"))
    }
}

/// Body of the pending-review count endpoint.
#[derive(Debug, Deserialize)]
pub struct PendingCount {
    #[serde(default)]
    pub count: u64,
}
