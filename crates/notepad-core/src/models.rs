//! Note data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-supplied fields of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContent {
    pub title: String,
    pub context: String,
    pub author: String,
    pub is_public: bool,
}

/// A stored note.
///
/// `updated_at` equals `created_at` for every note: nothing ever modifies a
/// note once it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub info: NoteContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a note stamped with `now` for both timestamps.
    pub fn new(id: i64, info: NoteContent, now: DateTime<Utc>) -> Self {
        Self {
            id,
            info,
            created_at: now,
            updated_at: now,
        }
    }
}
