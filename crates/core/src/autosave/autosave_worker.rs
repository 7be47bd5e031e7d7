//! Async driver for [`AutoSave`].
//!
//! Commands arrive on an mpsc channel; the worker sleeps until the debounce
//! deadline and runs one save at a time. Dropping or closing the handle
//! flushes any pending draft before the worker exits.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};

use crate::autosave::autosave_state::{AutoSave, SaveState};
use crate::autosave::autosave_traits::DraftSaver;

enum Command<T> {
    Edit(T),
    Flush,
    Retry,
}

/// Handle to a running auto-save worker.
pub struct AutoSaveHandle<T> {
    sender: mpsc::UnboundedSender<Command<T>>,
    state: watch::Receiver<SaveState>,
    task: JoinHandle<()>,
}

impl<T> AutoSaveHandle<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn spawn(
        saver: Arc<dyn DraftSaver<T>>,
        persisted: Option<T>,
        debounce: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(SaveState::Idle);
        let machine = AutoSave::new(persisted, debounce);
        let task = tokio::spawn(autosave_worker(receiver, machine, saver, state_tx));

        Self {
            sender,
            state,
            task,
        }
    }

    pub fn edit(&self, value: T) {
        self.send(Command::Edit(value));
    }

    /// Saves a pending draft without waiting for the debounce window.
    pub fn flush(&self) {
        self.send(Command::Flush);
    }

    pub fn retry(&self) {
        self.send(Command::Retry);
    }

    pub fn state(&self) -> SaveState {
        self.state.borrow().clone()
    }

    /// Read-only view of the save state for other components.
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.state.clone()
    }

    /// Flushes pending work and waits for the worker to exit.
    pub async fn close(self) -> SaveState {
        let Self {
            sender,
            state,
            task,
        } = self;
        drop(sender);
        if let Err(e) = task.await {
            warn!("[AutoSave] Worker ended abnormally: {}", e);
        }
        let last = state.borrow().clone();
        last
    }

    fn send(&self, command: Command<T>) {
        if self.sender.send(command).is_err() {
            warn!("[AutoSave] Worker is gone, dropping command");
        }
    }
}

async fn autosave_worker<T>(
    mut receiver: mpsc::UnboundedReceiver<Command<T>>,
    mut machine: AutoSave<T>,
    saver: Arc<dyn DraftSaver<T>>,
    state_tx: watch::Sender<SaveState>,
) where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    debug!("[AutoSave] Worker started");

    loop {
        let deadline = machine.deadline();
        tokio::select! {
            command = receiver.recv() => {
                let now = Instant::now();
                match command {
                    Some(Command::Edit(value)) => machine.edit(value, now),
                    Some(Command::Flush) => machine.flush(now),
                    Some(Command::Retry) => machine.retry(now),
                    None => {
                        machine.flush(now);
                        save_due(&mut machine, saver.as_ref(), &state_tx).await;
                        info!("[AutoSave] Worker shutting down");
                        return;
                    }
                }
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                save_due(&mut machine, saver.as_ref(), &state_tx).await;
            }
        }
        state_tx.send_replace(machine.state().clone());
    }
}

async fn save_due<T>(
    machine: &mut AutoSave<T>,
    saver: &dyn DraftSaver<T>,
    state_tx: &watch::Sender<SaveState>,
) where
    T: Clone + PartialEq + Send + Sync,
{
    let Some(value) = machine.poll(Instant::now()) else {
        return;
    };
    state_tx.send_replace(SaveState::Saving);

    let result = saver.save(&value).await.map_err(|e| {
        warn!("[AutoSave] Save failed: {}", e);
        e.to_string()
    });
    machine.finish(result);
    state_tx.send_replace(machine.state().clone());
}
