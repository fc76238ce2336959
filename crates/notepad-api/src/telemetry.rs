//! Tracing subscriber setup for the server binary.
//!
//! Environment variables:
//!   LOG_FORMAT  - "json" or "text" (default: "text")
//!   LOG_FILE    - path to log file (optional, enables daily-rotated file logging)
//!   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected on stdout, off in files)
//!   RUST_LOG    - standard env filter (default given by the caller)

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name used when `LOG_FILE` names a directory rather than a file.
const DEFAULT_LOG_FILE_NAME: &str = "notepad-api.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging options read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub ansi: Option<bool>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let file = lookup("LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let ansi = lookup("LOG_ANSI").map(|v| v == "true" || v == "1");

        Self { format, file, ansi }
    }
}

/// Split a log file path into the directory the appender writes to and the
/// file name prefix it rotates.
///
/// A bare file name has an empty parent, which is taken as the working
/// directory.
pub fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME)
        .to_string();
    (dir, name)
}

/// Install the global subscriber.
///
/// The returned guard must be held for the life of the process when file
/// logging is enabled, otherwise buffered lines are dropped.
pub fn init_tracing(default_filter: &str) -> Option<WorkerGuard> {
    let settings = LogSettings::from_env();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (writer, ansi, guard) = match settings.file {
        Some(ref path) => {
            let (dir, name) = split_log_path(path);
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            (
                BoxMakeWriter::new(non_blocking),
                Some(settings.ansi.unwrap_or(false)),
                Some(guard),
            )
        }
        None => (BoxMakeWriter::new(std::io::stdout), settings.ansi, None),
    };

    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    let layer = match ansi {
        Some(ansi) => layer.with_ansi(ansi),
        None => layer,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    match settings.format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Text => registry.with(layer).init(),
    }

    info!(
        log_format = ?settings.format,
        log_file = ?settings.file,
        "Logging initialized"
    );

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_bare_file_name_logs_to_working_directory() {
        let (dir, name) = split_log_path(Path::new("notepad.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "notepad.log");
    }

    #[test]
    fn test_nested_path_keeps_parent() {
        let (dir, name) = split_log_path(Path::new("/var/log/notepad/api.log"));
        assert_eq!(dir, PathBuf::from("/var/log/notepad"));
        assert_eq!(name, "api.log");
    }

    #[test]
    fn test_root_path_falls_back_to_default_name() {
        let (dir, name) = split_log_path(Path::new("/"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_settings_defaults() {
        let s = settings(&[]);
        assert_eq!(s.format, LogFormat::Text);
        assert_eq!(s.file, None);
        assert_eq!(s.ansi, None);
    }

    #[test]
    fn test_settings_from_variables() {
        let s = settings(&[
            ("LOG_FORMAT", "json"),
            ("LOG_FILE", "logs/api.log"),
            ("LOG_ANSI", "1"),
        ]);
        assert_eq!(s.format, LogFormat::Json);
        assert_eq!(s.file, Some(PathBuf::from("logs/api.log")));
        assert_eq!(s.ansi, Some(true));
    }

    #[test]
    fn test_empty_log_file_means_stdout() {
        assert_eq!(settings(&[("LOG_FILE", "")]).file, None);
    }
}
