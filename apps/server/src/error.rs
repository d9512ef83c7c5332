//! API error handling.
//!
//! Every error leaving the API is a JSON object `{"error": <message>}` with
//! the appropriate status code, including framework-level rejections such as
//! a malformed request body. Clients never see an HTML error page.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quoteshelf_core::errors::{DatabaseError, Error};
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A status code plus the client-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(v) => ApiError::new(StatusCode::BAD_REQUEST, v.to_string()),
            // NotFound carries the full client-facing message
            Error::Database(DatabaseError::NotFound(msg)) => {
                ApiError::new(StatusCode::NOT_FOUND, msg)
            }
            // Persistence failures: the write was rolled back, tell the
            // client the service (not the request) is at fault
            Error::Database(
                e @ (DatabaseError::TransactionFailed(_)
                | DatabaseError::ConnectionFailed(_)
                | DatabaseError::PoolCreationFailed(_)),
            ) => ApiError::new(StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
            other => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// `Json` extractor whose rejection is rendered through [`ApiError`], so a
/// malformed or mistyped body produces the same JSON error shape as
/// everything else.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor with the same JSON rejection treatment, so a non-numeric
/// id segment is a JSON 400 rather than a plain-text error.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
