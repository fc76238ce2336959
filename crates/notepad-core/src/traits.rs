//! Core traits for notepad abstractions.

use async_trait::async_trait;

use crate::models::Note;

/// Keyed storage for notes, shared by every in-flight request.
///
/// Implementations must let readers run concurrently with each other while a
/// `put` excludes every other access for the duration of its insert.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert the note, overwriting any entry with the same id.
    async fn put(&self, note: Note);

    /// Fetch a copy of the note with `id`, or `None` if there is none.
    async fn get(&self, id: i64) -> Option<Note>;

    /// Number of stored notes.
    async fn len(&self) -> usize;

    /// Whether the store holds no notes.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
