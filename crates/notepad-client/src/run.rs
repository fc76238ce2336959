//! The create-then-fetch demo run.

use tracing::{info, warn};

use notepad_core::logging::{NOTE_ID, OPERATION, SUBSYSTEM};
use notepad_core::Note;

use crate::client::NoteClient;
use crate::error::ClientError;
use crate::generator::NoteContentSource;

/// Both notes seen during a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub created: Note,
    pub fetched: Note,
}

impl RunReport {
    /// Whether the fetched note is identical to the one create returned.
    pub fn is_consistent(&self) -> bool {
        self.created == self.fetched
    }
}

/// Create one note from `source`, then fetch it back by its new id.
///
/// The two calls are sequential; the first failure ends the run.
pub async fn run<S>(client: &NoteClient, source: &mut S) -> Result<RunReport, ClientError>
where
    S: NoteContentSource + ?Sized,
{
    let content = source.next_content();

    let created = client.create_note(&content).await?;
    info!(
        { SUBSYSTEM } = "client",
        { OPERATION } = "create_note",
        { NOTE_ID } = created.id,
        title = %created.info.title,
        author = %created.info.author,
        is_public = created.info.is_public,
        created_at = %created.created_at,
        "Note created"
    );

    let fetched = client.get_note(created.id).await?;
    info!(
        { SUBSYSTEM } = "client",
        { OPERATION } = "get_note",
        { NOTE_ID } = fetched.id,
        title = %fetched.info.title,
        author = %fetched.info.author,
        is_public = fetched.info.is_public,
        updated_at = %fetched.updated_at,
        "Note info got"
    );

    let report = RunReport { created, fetched };
    if !report.is_consistent() {
        warn!({ NOTE_ID } = report.created.id, "Fetched note differs from created note");
    }
    Ok(report)
}
