//! Service configuration.
//!
//! Host, port and knowledge base location, with defaults overridable from
//! the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable for the bind host.
pub const HOST_ENV: &str = "DIAGNOSIS_HOST";
/// Environment variable for the bind port.
pub const PORT_ENV: &str = "DIAGNOSIS_PORT";
/// Environment variable for a knowledge base directory.
pub const KB_PATH_ENV: &str = "DIAGNOSIS_KB_PATH";

/// HTTP service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Knowledge base directory. `None` serves the built-in knowledge base.
    #[serde(default)]
    pub kb_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            kb_path: None,
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from a key lookup, falling back to defaults.
    ///
    /// An unparsable port is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup(HOST_ENV)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup(PORT_ENV)
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            kb_path: lookup(KB_PATH_ENV)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Returns the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
