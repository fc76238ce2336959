//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL is unusable
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection or transfer failure
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the operation does not accept
    #[error("Failed to {op}: unexpected status {status}")]
    UnexpectedStatus { op: &'static str, status: StatusCode },

    /// The response body was not a note
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server has no note with this id
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
}

impl ClientError {
    /// Whether the server reported the note as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NoteNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unexpected_status() {
        let err = ClientError::UnexpectedStatus {
            op: "create note",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "Failed to create note: unexpected status 500 Internal Server Error"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let err = ClientError::NoteNotFound(42);
        assert_eq!(err.to_string(), "Note not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ClientError = serde_json::from_str::<i64>("{").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ClientError>();
        assert_sync::<ClientError>();
    }
}
