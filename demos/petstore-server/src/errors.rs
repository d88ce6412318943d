use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// Errors returned by delegates and extractors.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum ApiError {
    /// The requested entity does not exist.
    #[display("{entity} {id} not found")]
    NotFound {
        /// The kind of entity.
        entity: &'static str,
        /// The requested identifier.
        id: String,
    },

    /// The delegate does not implement the operation.
    #[display("{operation} is not implemented")]
    NotImplemented {
        /// The operation id.
        operation: &'static str,
    },

    /// The request could not be understood.
    #[display("Bad request: {message}")]
    BadRequest {
        /// What was wrong.
        message: String,
    },

    /// The request body media type is not supported.
    #[display("Unsupported media type: {content_type}")]
    UnsupportedMediaType {
        /// The received `Content-Type`.
        content_type: String,
    },

    /// The server failed to build the response.
    #[display("Internal error: {message}")]
    Internal {
        /// What went wrong.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// The HTTP status of this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response returned for all error cases
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// The HTTP status code
    pub code: u16,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }

        let error_response = ApiErrorResponse {
            code: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}
