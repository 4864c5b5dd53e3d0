//! # hello-fn — single-route cloud function with a local adapter
//!
//! A cloud function handler answering `GET /hello` with a fixed JSON body,
//! plus a local HTTP server that maps ordinary requests into the same
//! event shape for development and testing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Inbound HTTP request                │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          LocalServer (adapter)                      │
//! │   http request ──► FnRequest + InvocationContext    │
//! │   FnResponse   ──► http response                    │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          HelloFunction (handler)                    │
//! │   GET /hello ──► 200 {"message":"hello world"}      │
//! │   anything else ──► 404 {"error":"Not Found"}       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hello_fn::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = LocalConfig::new().host("127.0.0.1").port(3000);
//!     let server = LocalServer::new(config, Arc::new(HelloFunction));
//!     server.run().await
//! }
//! ```
//!
//! The handler itself never fails; the adapter catches any unexpected
//! error and answers `500 {"error":"Internal Server Error"}`.

pub mod function;
pub mod http;
pub mod local;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::function::{FnError, Handler, HelloFunction, InvocationContext};
    pub use crate::http::{FnRequest, FnResponse, StatusCode};
    pub use crate::local::{LocalConfig, LocalServer};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use function::{FnError, Handler, HelloFunction, InvocationContext};
pub use http::{FnRequest, FnResponse, StatusCode};
pub use local::{LocalConfig, LocalServer};
