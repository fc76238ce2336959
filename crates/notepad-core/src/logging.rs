//! Structured logging field name constants for notepad.
//!
//! Both binaries use these names so server and client events can be queried
//! with the same keys.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed on our side, or the client run aborted |
//! | WARN  | Request rejected (bad input, unknown note) |
//! | INFO  | Lifecycle events (startup, shutdown), client report lines |
//! | DEBUG | Per-request store operations |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID set by the request-id layer. Format: UUIDv7.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "store", "client"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "create_note", "get_note"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note identifier being operated on.
pub const NOTE_ID: &str = "note_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of notes held by the store after an operation.
pub const STORE_SIZE: &str = "store_size";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// HTTP status code of a response.
pub const STATUS: &str = "status";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
