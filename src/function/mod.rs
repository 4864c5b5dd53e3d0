//! Cloud function side: the handler seam and the hello responder.

pub mod handler;
mod hello;

pub use handler::{FnError, Handler, InvocationContext};
pub use hello::HelloFunction;
