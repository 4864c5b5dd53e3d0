//! Function handler trait, invocation context and error type.

use crate::http::{FnRequest, FnResponse};
use async_trait::async_trait;

/// Metadata accompanying a single invocation.
///
/// When running under the local server every field holds a local stand-in
/// value; none of them alter what the handler returns. The original cloud
/// runtime's contract carries dozens of identity and certificate
/// placeholder fields — only the ones a handler could plausibly read are
/// kept here.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Name of the invoked function.
    pub function_name: String,
    /// Function version.
    pub function_version: String,
    /// Unique id for this invocation.
    pub request_id: String,
    /// Memory ceiling stand-in, in MiB.
    pub memory_limit_mb: u32,
    /// Source address of the caller.
    pub source_ip: String,
    /// User agent of the caller, empty if absent.
    pub user_agent: String,
    deadline_millis: u64,
}

impl InvocationContext {
    /// Create a context with local stand-in values.
    pub fn new(function_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            function_version: "1".to_string(),
            request_id: request_id.into(),
            memory_limit_mb: 128,
            source_ip: "localhost".to_string(),
            user_agent: String::new(),
            deadline_millis: 30_000,
        }
    }

    /// Set the caller's source address.
    pub fn with_source_ip(mut self, source_ip: impl Into<String>) -> Self {
        self.source_ip = source_ip.into();
        self
    }

    /// Set the caller's user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Time remaining before the invocation deadline.
    ///
    /// Static stand-in; the local server never enforces a deadline.
    pub fn remaining_time_millis(&self) -> u64 {
        self.deadline_millis
    }
}

/// Handler trait for implementing cloud functions.
///
/// The local server accepts any implementation; this crate ships
/// [`HelloFunction`](crate::function::HelloFunction).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle a single invocation.
    async fn invoke(
        &self,
        event: FnRequest,
        ctx: &InvocationContext,
    ) -> Result<FnResponse, FnError>;
}

/// Function error type.
///
/// Route misses are ordinary 404 responses, not errors; this type is the
/// internal-failure channel the local server recovers from with a 500.
#[derive(Debug, Clone)]
pub struct FnError {
    /// Error message.
    pub message: String,
    /// Status code the failure maps to.
    pub code: u16,
}

impl FnError {
    /// Create a new internal error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 500,
        }
    }

    /// Create an error with a specific status code.
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl std::fmt::Display for FnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for FnError {}

impl From<serde_json::Error> for FnError {
    fn from(err: serde_json::Error) -> Self {
        FnError::new(err.to_string())
    }
}
