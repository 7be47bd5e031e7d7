//! Auto-save module - debounced persistence of goal drafts.

mod autosave_state;
mod autosave_traits;
mod autosave_worker;

pub use autosave_state::{AutoSave, SaveState};
pub use autosave_traits::DraftSaver;
pub use autosave_worker::AutoSaveHandle;
