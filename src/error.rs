//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the API. Every failure
//! inside the service collapses into one of two outward kinds: a resource
//! that could not be resolved ([`ServiceError::NotFound`]) or anything
//! else ([`ServiceError::BadRequest`]). Each variant maps to a specific
//! HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "Product with ID 42 not found",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (1xxx = request, 2xxx = not found).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// The service deliberately exposes only these two kinds: store-level
/// failures (connectivity, constraint violations, malformed input) are
/// rewrapped into [`ServiceError::BadRequest`] with a fixed per-operation
/// message at each operation boundary, so no store error crosses the
/// service boundary in its original form.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The identifier does not resolve to a stored record.
    #[error("{0}")]
    NotFound(String),

    /// Any other failure, collapsed into a generic per-operation message.
    #[error("{0}")]
    BadRequest(String),
}

impl ServiceError {
    /// Builds the canonical not-found error for a product identifier.
    #[must_use]
    pub fn product_not_found(id: &crate::domain::ProductId) -> Self {
        Self::NotFound(format!("Product with ID {id} not found"))
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::BadRequest(_) => 1001,
            Self::NotFound(_) => 2001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
