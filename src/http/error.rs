//! API error type and its HTTP rendering.
//!
//! Every error leaves the service as `{"message": "..."}`. Backend failures
//! render a fixed message; their detail is only logged.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::applications::ValidationError;
use crate::db::StoreError;

/// JSON body shared by all non-2xx responses.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body could not be decoded into the expected shape.
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Request body is too large.")]
    PayloadTooLarge,

    #[error("Origin not allowed.")]
    OriginNotAllowed,

    /// Store failure; detail stays in the source chain.
    #[error("Internal server error.")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::OriginNotAllowed => StatusCode::FORBIDDEN,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");

        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::BadRequest("Expected a JSON request body.")
            }
            JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest("Malformed JSON body."),
            JsonRejection::JsonDataError(_) => {
                ApiError::BadRequest("Request body has invalid field types.")
            }
            _ => ApiError::BadRequest("Invalid request body."),
        }
    }
}
