//! Local HTTP server that adapts inbound requests onto the function's
//! event shape and writes the function's response back out.

use crate::function::{Handler, InvocationContext};
use crate::http::{FnRequest, FnResponse, StatusCode};
use crate::local::LocalConfig;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Local development server.
///
/// Each connection is served on its own task; invocations share nothing
/// but the handler itself.
pub struct LocalServer {
    /// Server configuration.
    config: LocalConfig,
    /// The function to invoke for every request.
    handler: Arc<dyn Handler>,
}

impl LocalServer {
    /// Create a new local server.
    pub fn new(config: LocalConfig, handler: Arc<dyn Handler>) -> Self {
        Self { config, handler }
    }

    /// Bind the configured address and serve.
    pub async fn run(self) -> Result<(), BoxError> {
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve connections from an already-bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<(), BoxError> {
        info!("Local function server listening on {}", listener.local_addr()?);

        let handler = self.handler.clone();
        let config = self.config.clone();

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);

            let handler = handler.clone();
            let config = config.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let handler = handler.clone();
                    let config = config.clone();
                    async move { handle_request(req, handler, config, remote_addr).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("Error serving connection: {:?}", err);
                }
            });
        }
    }
}

/// Handle one inbound request: map it, invoke the function, map the result.
async fn handle_request(
    req: Request<Incoming>,
    handler: Arc<dyn Handler>,
    config: LocalConfig,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let request_id = generate_request_id();

    debug!(
        "Handling request: {} {} from {} [{}]",
        req.method(),
        req.uri().path(),
        remote_addr,
        request_id
    );

    let user_agent = req
        .headers()
        .get(hyper::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let event = match map_request(req, &config).await {
        Ok(event) => event,
        Err(e) => {
            warn!("Failed to map inbound request: {} [{}]", e, request_id);
            return Ok(map_response(internal_error()));
        }
    };

    let ctx = InvocationContext::new(&config.function_name, &request_id)
        .with_source_ip(remote_addr.ip().to_string())
        .with_user_agent(user_agent);

    match handler.invoke(event, &ctx).await {
        Ok(response) => Ok(map_response(response)),
        Err(e) => {
            error!("Handler error: {} [{}]", e, request_id);
            Ok(map_response(internal_error()))
        }
    }
}

/// Map an inbound HTTP request into the function's event shape.
pub async fn map_request<B>(req: Request<B>, config: &LocalConfig) -> Result<FnRequest, BoxError>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let query = match req.uri().query() {
        Some(q) => serde_urlencoded::from_str(q)?,
        None => HashMap::new(),
    };

    let mut headers = HashMap::new();
    for (name, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            headers.insert(name.as_str().to_string(), v.to_string());
        }
    }

    let body_bytes = req.collect().await.map_err(Into::into)?.to_bytes();
    if body_bytes.len() > config.max_body_size {
        return Err("Request body too large".into());
    }
    let body = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).to_string())
    };

    Ok(FnRequest {
        method,
        path,
        query,
        headers,
        body,
    })
}

/// Map a function response back onto the outbound HTTP reply.
pub fn map_response(fn_response: FnResponse) -> Response<Full<Bytes>> {
    let status = hyper::StatusCode::from_u16(fn_response.status.0).unwrap_or_else(|_| {
        warn!(
            "Invalid status code {}, falling back to 500 Internal Server Error",
            fn_response.status.0
        );
        hyper::StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut builder = Response::builder().status(status);

    for (name, value) in fn_response.headers {
        builder = builder.header(name, value);
    }

    builder.body(Full::new(Bytes::from(fn_response.body))).unwrap()
}

/// Generic 500 surface; the only recovery path in the system.
fn internal_error() -> FnResponse {
    FnResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// Generate a unique request ID.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{:x}", timestamp)
}
