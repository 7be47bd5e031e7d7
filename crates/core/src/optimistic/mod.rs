//! Optimistic values: show a mutation right away, reconcile with the server
//! answer later.

/// Identifies one optimistic change. Only the newest ticket may clear the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTicket(u64);

/// A confirmed value plus an optional local overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimistic<T> {
    confirmed: T,
    overlay: Option<T>,
    version: u64,
    /// Ticket (or reset) the confirmed value came from. Older answers are stale.
    confirmed_at: u64,
}

impl<T> Optimistic<T> {
    pub fn new(confirmed: T) -> Self {
        Self {
            confirmed,
            overlay: None,
            version: 0,
            confirmed_at: 0,
        }
    }

    /// The value to display: the overlay when present, else the confirmed one.
    pub fn current(&self) -> &T {
        self.overlay.as_ref().unwrap_or(&self.confirmed)
    }

    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    pub fn has_pending(&self) -> bool {
        self.overlay.is_some()
    }

    /// Shows `value` immediately until the change is resolved.
    pub fn apply(&mut self, value: T) -> OverlayTicket {
        self.version += 1;
        self.overlay = Some(value);
        OverlayTicket(self.version)
    }

    /// Reconciles a change with the server's answer.
    ///
    /// Success makes the server value the confirmed one. Failure discards the
    /// overlay so the last confirmed value shows again. Either way a newer
    /// overlay stays in place. A success older than the one already confirmed,
    /// or older than the last [`reset`](Self::reset), does not touch the value.
    pub fn resolve<E>(&mut self, ticket: OverlayTicket, outcome: Result<T, E>) -> Result<(), E> {
        let latest = ticket.0 == self.version;
        match outcome {
            Ok(_) if ticket.0 <= self.confirmed_at => Ok(()),
            Ok(server_value) => {
                self.confirmed = server_value;
                self.confirmed_at = ticket.0;
                if latest {
                    self.overlay = None;
                }
                Ok(())
            }
            Err(e) => {
                if latest {
                    self.overlay = None;
                }
                Err(e)
            }
        }
    }

    /// Replaces the confirmed value from a fresh load and drops any overlay.
    pub fn reset(&mut self, confirmed: T) {
        self.version += 1;
        self.confirmed_at = self.version;
        self.confirmed = confirmed;
        self.overlay = None;
    }
}
