//! Error types for the gateway crate.
//!
//! The [`IntoResponse`] impl is the terminal error responder: every failure
//! a handler or middleware propagates ends up here and is translated into
//! the uniform `{"message": ...}` envelope exactly once.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::ValidationError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A create/update payload failed the field validation rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed as JSON.
    #[error("{0}")]
    InvalidBody(String),

    /// The API key header is missing or does not match the configured
    /// secret.
    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    /// The requested product id does not exist in the store.
    #[error("Product not found")]
    ProductNotFound,

    /// An unexpected failure with no more specific mapping.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Validation(_) | GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::ProductNotFound => StatusCode::NOT_FOUND,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
