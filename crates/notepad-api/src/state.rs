//! Application state shared across handlers.

use std::sync::Arc;

use notepad_core::{IdGenerator, InMemoryNoteStore, NoteRepository, RandomIds};

/// Shared handles given to every request.
///
/// Built once by the composition root; clones are cheap and point at the
/// same store.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(notes: impl NoteRepository + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            notes: Arc::new(notes),
            ids: Arc::new(ids),
        }
    }

    /// Empty in-memory store with random identifiers.
    pub fn in_memory() -> Self {
        Self::new(InMemoryNoteStore::new(), RandomIds)
    }
}
