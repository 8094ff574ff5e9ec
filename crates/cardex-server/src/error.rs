//! API errors with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cardex_core::CardexError;

use crate::types::ErrorResponse;

/// Request failures, each rendered as an error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or unreadable upload.
    #[error("{0}")]
    BadRequest(String),

    /// Upload exceeds the configured body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The upload is not a decodable image.
    #[error("{0}")]
    Decode(String),

    /// The OCR engine failed.
    #[error("{0}")]
    Recognition(String),

    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Recognition(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Scan request failed");
        } else {
            tracing::warn!(error = %self, "Rejected scan request");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<CardexError> for ApiError {
    fn from(err: CardexError) -> Self {
        match err {
            CardexError::Decode(_) => ApiError::Decode(err.to_string()),
            CardexError::Ocr(_) => ApiError::Recognition(err.to_string()),
            CardexError::Io(_) | CardexError::Config(_) => ApiError::Internal(err.to_string()),
        }
    }
}
