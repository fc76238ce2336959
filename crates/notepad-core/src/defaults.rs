//! Centralized default constants for notepad.
//!
//! The server and the client both take their network settings from here.
//! There is no environment override, so the two always agree on where the
//! service lives.

// =============================================================================
// NETWORK
// =============================================================================

/// Host the server binds to.
pub const HOST: &str = "localhost";

/// Port the server binds to.
pub const PORT: u16 = 8080;

/// Base URL the client talks to.
pub const BASE_URL: &str = "http://localhost:8080";

// =============================================================================
// ROUTES
// =============================================================================

/// Collection path for notes (`POST` creates).
pub const NOTES_PATH: &str = "/notes";

/// Path for a single note (`GET` fetches by id).
pub const NOTE_PATH: &str = "/notes/:id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_matches_host_and_port() {
        assert_eq!(BASE_URL, format!("http://{}:{}", HOST, PORT));
    }

    #[test]
    fn test_note_path_is_under_collection() {
        assert!(NOTE_PATH.starts_with(NOTES_PATH));
    }
}
