//! Local development server for the hello function.

use hello_fn::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LocalConfig::new().host("127.0.0.1").port(3000);
    let port = config.port;

    let server = LocalServer::new(config, Arc::new(HelloFunction));

    tracing::info!("Try: curl http://localhost:{}/hello", port);

    server.run().await
}
