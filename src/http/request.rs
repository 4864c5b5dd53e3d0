//! Event-shaped HTTP request consumed by the function handler.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound request event.
///
/// This is the shape a cloud function invocation carries: method and path
/// are always present, everything else is optional. The local server builds
/// one of these from each inbound HTTP request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnRequest {
    /// HTTP method, exactly as received ("GET", "POST", ...).
    pub method: String,
    /// Request path ("/hello").
    pub path: String,
    /// Decoded query string parameters.
    #[serde(default)]
    pub query: HashMap<String, String>,
    /// HTTP headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl FnRequest {
    /// Create a new request event.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query string parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a header value.
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }

    /// Parse the body as JSON if present.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.body.as_ref().map(|b| serde_json::from_str(b))
    }
}

impl Default for FnRequest {
    fn default() -> Self {
        Self::new("GET", "/")
    }
}
