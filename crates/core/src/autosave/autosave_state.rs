use serde::Serialize;
use tokio::time::{Duration, Instant};

/// Where a draft is in its save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum SaveState {
    /// Nothing edited since the value was loaded.
    Idle,
    /// An edit is waiting for the debounce window to pass.
    Pending,
    Saving,
    Saved,
    Error(String),
}

/// Debounced auto-save state machine.
///
/// Time is passed in explicitly so the machine stays free of timers. A value
/// equal to the last persisted one is never written.
#[derive(Debug)]
pub struct AutoSave<T> {
    debounce: Duration,
    state: SaveState,
    persisted: Option<T>,
    draft: Option<T>,
    in_flight: Option<T>,
    due_at: Option<Instant>,
    saved_once: bool,
}

impl<T: Clone + PartialEq> AutoSave<T> {
    pub fn new(persisted: Option<T>, debounce: Duration) -> Self {
        Self {
            debounce,
            state: SaveState::Idle,
            persisted,
            draft: None,
            in_flight: None,
            due_at: None,
            saved_once: false,
        }
    }

    pub fn state(&self) -> &SaveState {
        &self.state
    }

    pub fn persisted(&self) -> Option<&T> {
        self.persisted.as_ref()
    }

    /// Unsaved or in-flight changes exist.
    pub fn is_dirty(&self) -> bool {
        self.draft.is_some() || self.in_flight.is_some()
    }

    /// When the next save becomes due. `None` while a save is running.
    pub fn deadline(&self) -> Option<Instant> {
        if self.in_flight.is_some() {
            None
        } else {
            self.due_at
        }
    }

    /// Records an edit and restarts the debounce window.
    pub fn edit(&mut self, value: T, now: Instant) {
        if self.in_flight.is_none() && self.persisted.as_ref() == Some(&value) {
            self.draft = None;
            self.due_at = None;
            self.settle();
            return;
        }

        self.draft = Some(value);
        self.due_at = Some(now + self.debounce);
        if self.in_flight.is_none() {
            self.state = SaveState::Pending;
        }
    }

    /// Makes a pending draft due immediately.
    pub fn flush(&mut self, now: Instant) {
        if self.draft.is_some() {
            self.due_at = Some(now);
        }
    }

    /// Re-queues the draft that failed to save.
    pub fn retry(&mut self, now: Instant) {
        if matches!(self.state, SaveState::Error(_)) && self.draft.is_some() {
            self.due_at = Some(now);
            self.state = SaveState::Pending;
        }
    }

    /// Returns the value to save once the debounce window has passed.
    ///
    /// The caller must report the result through [`finish`](Self::finish)
    /// before the next value is handed out.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(due) if due <= now => {}
            _ => return None,
        }
        self.due_at = None;

        let value = self.draft.take()?;
        if self.persisted.as_ref() == Some(&value) {
            self.settle();
            return None;
        }

        self.in_flight = Some(value.clone());
        self.state = SaveState::Saving;
        Some(value)
    }

    /// Reports the outcome of the save started by [`poll`](Self::poll).
    pub fn finish(&mut self, result: Result<(), String>) {
        let Some(value) = self.in_flight.take() else {
            return;
        };

        match result {
            Ok(()) => {
                self.persisted = Some(value);
                self.saved_once = true;
                if self.draft.is_some() {
                    self.state = SaveState::Pending;
                } else {
                    self.state = SaveState::Saved;
                }
            }
            Err(message) => {
                // Keep the failed value for a manual retry unless a newer edit replaced it.
                if self.draft.is_none() {
                    self.draft = Some(value);
                    self.due_at = None;
                }
                self.state = SaveState::Error(message);
            }
        }
    }

    fn settle(&mut self) {
        self.state = if self.saved_once {
            SaveState::Saved
        } else {
            SaveState::Idle
        };
    }
}
