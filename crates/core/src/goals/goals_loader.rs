//! Concurrent loader for paginated goal collections.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::constants::MAX_FETCH_PAGES;
use crate::errors::Result;
use crate::goals::goals_model::{GoalLoadResult, GoalQuery};
use crate::goals::goals_traits::GoalApiTrait;

/// Configuration for goal loads.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Maximum number of pages to fetch per load (safety limit).
    pub max_pages: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_pages: MAX_FETCH_PAGES,
        }
    }
}

/// Loads all goals for a query without knowing the page count up front.
///
/// Page 1 is fetched alone to learn `pages`; pages `2..=pages` are then
/// requested concurrently and merged in page order. A failed first page fails
/// the load. Later failures are counted and reported as a warning, and the
/// records that did arrive are still returned.
pub struct GoalLoader {
    api: Arc<dyn GoalApiTrait>,
    config: LoaderConfig,
}

impl GoalLoader {
    pub fn new(api: Arc<dyn GoalApiTrait>, config: LoaderConfig) -> Self {
        Self { api, config }
    }

    pub async fn load_all(&self, query: &GoalQuery) -> Result<GoalLoadResult> {
        let first = self.api.list_goals(query, 1).await?;
        let total_pages = first.pages.max(1);
        let mut goals = first.items;

        debug!(
            "[GoalLoader] Period {}: page 1/{} returned {} goals ({} total)",
            query.period_id,
            total_pages,
            goals.len(),
            first.total
        );

        let last_page = total_pages.min(self.config.max_pages.max(1));
        let mut warnings = Vec::new();
        if last_page < total_pages {
            warn!(
                "[GoalLoader] {} pages available, loading only the first {}",
                total_pages, last_page
            );
            warnings.push(format!(
                "Only the first {} of {} pages were loaded",
                last_page, total_pages
            ));
        }

        let requests = (2..=last_page).map(|page| async move {
            (page, self.api.list_goals(query, page).await)
        });
        let results = join_all(requests).await;

        let mut pages_failed = 0u32;
        for (page, result) in results {
            match result {
                Ok(batch) => goals.extend(batch.items),
                Err(e) => {
                    pages_failed += 1;
                    warn!("[GoalLoader] Failed to fetch page {}: {}", page, e);
                }
            }
        }

        if pages_failed > 0 {
            warnings.push(format!(
                "Failed to load {} of {} pages; goal data may be incomplete",
                pages_failed, last_page
            ));
        }

        info!(
            "[GoalLoader] Loaded {} goals for period {} ({} pages, {} failed)",
            goals.len(),
            query.period_id,
            last_page,
            pages_failed
        );

        Ok(GoalLoadResult {
            goals,
            total_pages,
            pages_failed,
            warning: (!warnings.is_empty()).then(|| warnings.join("; ")),
        })
    }
}
