//! Server settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Default time a client gets to send its request head.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Where and what the server serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port; `0` picks a free port.
    pub port: u16,
    /// Directory static files are served from.
    pub web_root: PathBuf,
    /// URL path answered with the JSON artifact.
    pub artifact_route: String,
    /// File holding the JSON artifact.
    pub artifact_path: PathBuf,
    /// Milliseconds to wait for a request head before answering 408.
    pub read_timeout_ms: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            web_root: PathBuf::from("."),
            artifact_route: "/family.json".to_string(),
            artifact_path: PathBuf::from("family.json"),
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl ServeConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_web_root(mut self, web_root: impl Into<PathBuf>) -> Self {
        self.web_root = web_root.into();
        self
    }

    #[must_use]
    pub fn with_artifact(mut self, route: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.artifact_route = route.into();
        self.artifact_path = path.into();
        self
    }
}
