//! Local adapter: runs the function behind an ordinary HTTP listener.

mod config;
mod server;

pub use config::LocalConfig;
pub use server::{map_request, map_response, LocalServer};
