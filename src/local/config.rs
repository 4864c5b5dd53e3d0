//! Local server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the local development server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Function name reported in the invocation context.
    pub function_name: String,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            function_name: "local-fn".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl LocalConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the function name used for context stand-ins.
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Set the maximum request body size in bytes.
    pub fn max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
