//! notepad-client: create a random note on a notepad server and read it back.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use notepad_client::{run, FakeNoteContent, NoteClient, RunReport};
use notepad_core::defaults::BASE_URL;
use notepad_core::logging::ERROR_MSG;

#[derive(Parser)]
#[command(name = "notepad-client")]
#[command(author, version, about = "Create a random note on a notepad server and fetch it back")]
struct Cli {
    /// Base URL of the notepad server
    #[arg(long, default_value = BASE_URL)]
    base_url: String,
}

/// Logs go to stderr so stdout carries only the notes.
///
/// LOG_FORMAT ("json" | "text"), LOG_ANSI and RUST_LOG behave as on the server.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notepad_client=info".into());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if log_format == "json" {
        builder.json().init();
    } else if let Some(ansi) = log_ansi {
        builder.with_ansi(ansi).init();
    } else {
        builder.init();
    }
}

fn print_report(report: &RunReport) -> serde_json::Result<()> {
    println!("Note created:\n{}", serde_json::to_string_pretty(&report.created)?);
    println!("Note info got:\n{}", serde_json::to_string_pretty(&report.fetched)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let client = match NoteClient::new(&cli.base_url) {
        Ok(client) => client,
        Err(e) => {
            error!({ ERROR_MSG } = %e, "Failed to create client");
            return ExitCode::FAILURE;
        }
    };

    let mut source = FakeNoteContent::new();
    match run(&client, &mut source).await {
        Ok(report) => match print_report(&report) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!({ ERROR_MSG } = %e, "Failed to print notes");
                ExitCode::FAILURE
            }
        },
        Err(e) if e.is_not_found() => {
            error!({ ERROR_MSG } = %e, "Failed to get note: server has no note with that id");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!({ ERROR_MSG } = %e, base_url = %client.base_url(), "Note run failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults_to_shared_constant() {
        std::env::set_var("NOTEPAD_URL", "http://elsewhere:9000");
        let cli = Cli::try_parse_from(["notepad-client"]).unwrap();
        std::env::remove_var("NOTEPAD_URL");

        assert_eq!(cli.base_url, BASE_URL);
    }

    #[test]
    fn test_base_url_flag() {
        let cli =
            Cli::try_parse_from(["notepad-client", "--base-url", "http://127.0.0.1:3000"]).unwrap();
        assert_eq!(cli.base_url, "http://127.0.0.1:3000");
    }
}
