//! The hello function: a pure (path, method) to response mapping.

use crate::function::handler::{FnError, Handler, InvocationContext};
use crate::http::{FnRequest, FnResponse, StatusCode};
use async_trait::async_trait;

/// Single-route responder.
///
/// `GET /hello` returns `{"message":"hello world"}`; every other (path,
/// method) pair returns 404 `{"error":"Not Found"}`. Matching is exact and
/// case-sensitive. Stateless, no side effects.
pub struct HelloFunction;

#[async_trait]
impl Handler for HelloFunction {
    async fn invoke(
        &self,
        event: FnRequest,
        _ctx: &InvocationContext,
    ) -> Result<FnResponse, FnError> {
        if event.path == "/hello" && event.method == "GET" {
            let response = FnResponse::json(
                StatusCode::OK,
                &serde_json::json!({ "message": "hello world" }),
            )?
            .header("Access-Control-Allow-Origin", "*");
            return Ok(response);
        }

        Ok(FnResponse::error(StatusCode::NOT_FOUND, "Not Found"))
    }
}
