//! Background polling for a mounted dashboard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::constants::MIN_REFRESH_INTERVAL_MS;
use crate::dashboard::session::DashboardSession;

#[derive(Debug, Default)]
struct PauseFlags {
    hidden: AtomicBool,
    input_focused: AtomicBool,
}

impl PauseFlags {
    fn is_paused(&self) -> bool {
        self.hidden.load(Ordering::SeqCst) || self.input_focused.load(Ordering::SeqCst)
    }
}

/// Owns the polling task. Dropping the handle stops polling.
///
/// Polling is skipped while the page is hidden or a text input has focus, so
/// a refresh never replaces data under the user's cursor.
pub struct RefreshHandle {
    flags: Arc<PauseFlags>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Spawns the polling loop. The first tick loads immediately.
    ///
    /// `every` is raised to [`MIN_REFRESH_INTERVAL_MS`] when shorter.
    pub fn spawn(session: Arc<DashboardSession>, every: Duration) -> Self {
        let every = every.max(Duration::from_millis(MIN_REFRESH_INTERVAL_MS));
        let flags = Arc::new(PauseFlags::default());
        let task_flags = Arc::clone(&flags);

        let task = tokio::spawn(async move {
            info!("[Refresh] Polling every {:?}", every);
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if session.is_closed() {
                    debug!("[Refresh] Session closed, stopping");
                    break;
                }
                if task_flags.is_paused() {
                    debug!("[Refresh] Paused, skipping tick");
                    continue;
                }
                if let Some(outcome) = session.refetch().await {
                    if let Some(error) = outcome.error {
                        warn!("[Refresh] Refresh failed: {}", error);
                    }
                }
            }
        });

        Self { flags, task }
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.flags.hidden.store(hidden, Ordering::SeqCst);
    }

    pub fn set_input_focused(&self, focused: bool) {
        self.flags.input_focused.store(focused, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.flags.is_paused()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
