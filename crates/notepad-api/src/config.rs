//! Server configuration.

use notepad_core::defaults::{HOST, PORT};

/// Address the server listens on.
///
/// Always the shared `HOST`/`PORT` constants in the binary; the client's
/// default base URL is built from the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
