//! Event-shaped HTTP types exchanged between the local server and the
//! function handler.

mod request;
mod response;

pub use request::FnRequest;
pub use response::{FnResponse, StatusCode};
