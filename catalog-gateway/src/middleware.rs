//! Request interceptors: logging, API-key auth, and body validation.
//!
//! Each stage either forwards the request to the next stage or
//! short-circuits with a terminal response. On mutating routes the order is
//! logging, then auth, then (for create/update) validation, then the
//! handler.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::info;

use catalog_core::validate_product_payload;

use crate::error::GatewayError;
use crate::state::SharedState;

/// Header carrying the shared secret on mutating requests.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Upper bound on buffered request bodies.
const BODY_LIMIT: usize = 1024 * 1024;

/// Logs one line per incoming request.
///
/// Pure observability: never alters the exchange, always forwards. The
/// timestamp comes from the subscriber's formatter.
pub async fn log_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), uri = %req.uri(), "incoming request");
    next.run(req).await
}

/// Requires the shared-secret header on mutating endpoints.
///
/// Short-circuits with `401` when the header is absent, not valid UTF-8, or
/// not exactly equal to the configured secret; later stages (validation and
/// the handler) never run in that case.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] on any credential mismatch.
pub async fn require_api_key(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let supplied = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if supplied != Some(state.api_key.as_str()) {
        return Err(GatewayError::Unauthorized);
    }
    Ok(next.run(req).await)
}

/// Enforces the create/update payload rules before the handler runs.
///
/// Buffers the body, applies the field checks, then reinstates the bytes so
/// the handler can deserialize the typed draft. An empty body is treated as
/// a body with no fields.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] when the body is not valid JSON,
/// the wrapped [`catalog_core::ValidationError`] when a field rule fails,
/// and [`GatewayError::Internal`] when the body cannot be read at all.
pub async fn validate_product_body(
    req: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| GatewayError::Internal(format!("failed to read request body: {e}")))?;

    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::InvalidBody(e.to_string()))?
    };
    validate_product_payload(&payload)?;

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
