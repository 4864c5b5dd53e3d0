//! Event-shaped HTTP response produced by the function handler.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Check if the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Check if the status code indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Check if the status code indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::OK
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

/// Outbound response event.
///
/// The body is always serialized JSON text; the status code is always set.
/// Constructed once per invocation and never mutated after the handler
/// returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// HTTP headers.
    pub headers: HashMap<String, String>,
    /// Response body as serialized JSON text.
    pub body: String,
}

impl FnResponse {
    /// Create a response with a JSON body and `Content-Type` set.
    pub fn json<T: Serialize>(
        status: impl Into<StatusCode>,
        data: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        Ok(Self {
            status: status.into(),
            headers: HashMap::new(),
            body,
        }
        .header("Content-Type", "application/json"))
    }

    /// Create an error response with body `{"error": message}`.
    ///
    /// Error responses carry the CORS header so browser clients can read
    /// them on every outcome.
    pub fn error(status: impl Into<StatusCode>, message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() }).to_string();
        Self {
            status: status.into(),
            headers: HashMap::new(),
            body,
        }
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
    }

    /// Add a header to the response.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Get a header value.
    pub fn get_header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }

    /// Parse the body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
