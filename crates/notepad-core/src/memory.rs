//! In-memory note store.
//!
//! One `RwLock` guards the whole map. Lookups take the read side and run in
//! parallel; inserts take the write side and exclude everything else until
//! the single `HashMap::insert` completes. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::logging::{NOTE_ID, STORE_SIZE, SUBSYSTEM};
use crate::models::Note;
use crate::traits::NoteRepository;

/// Thread-safe note store. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Arc<RwLock<HashMap<i64, Note>>>,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteStore {
    async fn put(&self, note: Note) {
        let id = note.id;
        let (replaced, size) = {
            let mut notes = self.notes.write().await;
            let replaced = notes.insert(id, note).is_some();
            (replaced, notes.len())
        };

        if replaced {
            warn!({ SUBSYSTEM } = "store", { NOTE_ID } = id, "Note id collision, earlier note replaced");
        }
        debug!({ SUBSYSTEM } = "store", { NOTE_ID } = id, { STORE_SIZE } = size, "Note stored");
    }

    async fn get(&self, id: i64) -> Option<Note> {
        self.notes.read().await.get(&id).cloned()
    }

    async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}
