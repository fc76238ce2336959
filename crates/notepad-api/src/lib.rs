//! notepad-api - HTTP API for creating and fetching notes.
//!
//! The binary in `main.rs` is only the composition root: it loads
//! configuration, sets up logging, builds an [`AppState`] and serves
//! [`app`]. Everything request-facing lives in this library so the router
//! can be driven in-process by tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod telemetry;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use notepad_core::defaults::{NOTES_PATH, NOTE_PATH};
use notepad_core::logging::REQUEST_ID;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(NOTES_PATH, post(handlers::notes::create_note))
        .route(NOTE_PATH, get(handlers::notes::get_note))
        // Notes have no size cap; axum would otherwise reject bodies over 2 MB.
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    { REQUEST_ID } = request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}
