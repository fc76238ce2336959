//! Client against the real server router on an ephemeral port.

use tokio::net::TcpListener;

use notepad_api::{app, AppState};
use notepad_client::{run, ClientError, FakeNoteContent, FixedNoteContent, NoteClient};
use notepad_core::NoteContent;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::in_memory()))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_scenario_against_live_server() {
    let base_url = spawn_server().await;
    let client = NoteClient::new(&base_url).unwrap();
    let content = NoteContent {
        title: "Stout".to_string(),
        context: "10.0.0.1".to_string(),
        author: "Ada".to_string(),
        is_public: true,
    };

    let report = run(&client, &mut FixedNoteContent(content.clone()))
        .await
        .unwrap();

    assert_ne!(report.created.id, 0);
    assert_eq!(report.created.info, content);
    assert_eq!(report.fetched.info, content);
    assert_eq!(report.fetched.created_at, report.fetched.updated_at);
    assert!(report.is_consistent());
}

#[tokio::test]
async fn test_random_content_round_trips() {
    let base_url = spawn_server().await;
    let client = NoteClient::new(&base_url).unwrap();
    let mut source = FakeNoteContent::seeded(2024);

    for _ in 0..5 {
        let report = run(&client, &mut source).await.unwrap();
        assert!(report.is_consistent());
    }
}

#[tokio::test]
async fn test_unknown_id_against_live_server() {
    let base_url = spawn_server().await;
    let client = NoteClient::new(&base_url).unwrap();

    let err = client.get_note(123).await.unwrap_err();
    assert!(matches!(err, ClientError::NoteNotFound(123)));
}
