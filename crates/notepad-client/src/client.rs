//! HTTP client for the notes endpoints.

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

use notepad_core::defaults::NOTES_PATH;
use notepad_core::logging::STATUS;
use notepad_core::{Note, NoteContent};

use crate::error::ClientError;

/// Thin wrapper over `reqwest` that speaks the notes wire contract.
#[derive(Debug, Clone)]
pub struct NoteClient {
    client: Client,
    base_url: String,
}

impl NoteClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}{}", self.base_url, NOTES_PATH)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, NOTES_PATH, id)
    }

    /// `POST /notes`. Anything but `201 Created` is an error.
    #[instrument(skip(self, content), fields(title = %content.title))]
    pub async fn create_note(&self, content: &NoteContent) -> Result<Note, ClientError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(content)
            .send()
            .await?;

        let status = response.status();
        debug!({ STATUS } = status.as_u16(), "Create note response");
        if status != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                op: "create note",
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET /notes/{id}`. A `404` comes back as [`ClientError::NoteNotFound`].
    #[instrument(skip(self))]
    pub async fn get_note(&self, id: i64) -> Result<Note, ClientError> {
        let response = self.client.get(self.note_url(id)).send().await?;

        let status = response.status();
        debug!({ STATUS } = status.as_u16(), "Get note response");
        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(ClientError::NoteNotFound(id)),
            status => {
                return Err(ClientError::UnexpectedStatus {
                    op: "get note",
                    status,
                })
            }
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_built_from_base() {
        let client = NoteClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.notes_url(), "http://localhost:8080/notes");
        assert_eq!(client.note_url(-3), "http://localhost:8080/notes/-3");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        for url in ["", "localhost:8080", "not a url", "ftp://example.com"] {
            let err = NoteClient::new(url).unwrap_err();
            assert!(matches!(err, ClientError::InvalidUrl { .. }), "{url:?}");
        }
    }
}
