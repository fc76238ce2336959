//! notepad-api - HTTP server for notepad

use tracing::info;

use notepad_api::{app, telemetry, AppState, ServerConfig};
use notepad_core::{InMemoryNoteStore, RandomIds};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _file_guard = telemetry::init_tracing("notepad_api=debug,notepad_core=debug,tower_http=debug");

    let config = ServerConfig::default();

    // The store lives here and is handed to every request through the router state.
    let state = AppState::new(InMemoryNoteStore::new(), RandomIds);
    let app = app(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
