//! Shared "goals awaiting my review" counter.
//!
//! The store is the only writer. Everything else holds a
//! [`PendingReviewReader`] and observes the value; the count is always
//! replaced by a fresh backend read, never incremented locally.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use crate::errors::Result;
use crate::reviews::ReviewApiTrait;

pub struct PendingReviewStore {
    api: Arc<dyn ReviewApiTrait>,
    sender: watch::Sender<Option<u64>>,
}

impl PendingReviewStore {
    pub fn new(api: Arc<dyn ReviewApiTrait>) -> Self {
        let (sender, _) = watch::channel(None);
        Self { api, sender }
    }

    pub fn subscribe(&self) -> PendingReviewReader {
        PendingReviewReader {
            receiver: self.sender.subscribe(),
        }
    }

    /// Last loaded count, `None` before the first successful refresh.
    pub fn current(&self) -> Option<u64> {
        *self.sender.borrow()
    }

    /// Re-reads the count from the backend and publishes it.
    ///
    /// On failure the previously published value is kept.
    pub async fn refresh(&self, period_id: &str) -> Result<u64> {
        let count = self.api.count_pending_reviews(period_id).await?;
        debug!("[PendingReviews] {} pending in period {}", count, period_id);
        self.sender.send_replace(Some(count));
        Ok(count)
    }
}

/// Read-only view of the pending review count.
#[derive(Clone)]
pub struct PendingReviewReader {
    receiver: watch::Receiver<Option<u64>>,
}

impl PendingReviewReader {
    pub fn get(&self) -> Option<u64> {
        *self.receiver.borrow()
    }

    /// Waits for the next published value. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Option<u64>> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}
