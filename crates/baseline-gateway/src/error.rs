use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use baseline_core::ProfileError;
use serde::Serialize;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Gateway-level errors, mapped onto HTTP statuses with JSON bodies.
///
/// Store-layer detail never reaches the caller: storage failures are
/// logged server-side and surfaced as a generic internal error.
#[derive(Debug)]
pub enum ApiError {
    /// The request carried no verified claims.
    Unauthenticated,
    /// The request body is absent, unparseable or the wrong shape.
    InvalidPayload(&'static str),
    /// Required profile fields are missing; carries their wire names.
    Validation(Vec<&'static str>),
    /// The requested resource does not exist.
    NotFound(&'static str),
    /// Unsupported method on an existing resource.
    MethodNotAllowed(String),
    /// Any server-side failure; detail is logged, never returned.
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidPayload(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Unauthorized".to_string(),
            ApiError::InvalidPayload(message) => (*message).to_string(),
            ApiError::Validation(fields) => {
                format!("Missing required fields: {}", fields.join(", "))
            }
            ApiError::NotFound(message) => (*message).to_string(),
            ApiError::MethodNotAllowed(method) => format!("Method {method} not allowed"),
            ApiError::Internal => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::MissingFields(fields) => ApiError::Validation(fields),
            ProfileError::Storage(detail) => {
                error!(error = %detail, "store operation failed");
                ApiError::Internal
            }
        }
    }
}
