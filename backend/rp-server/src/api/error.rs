//! HTTP API error types
//!
//! Every error renders as `{ "error": { "code", "message", "field"? } }`
//! with the matching status code.

use rp_auth::AuthError;
use rp_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const FORBIDDEN_MESSAGE: &str = "Forbidden: Invalid auth token";
pub const INTERNAL_MESSAGE: &str = "Internal server error";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user data.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "FORBIDDEN")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unreadable request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing bearer value on a gated route (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Dependency failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Level the response is logged at. Denials are already logged by the gate.
    pub fn log_level(&self) -> log::Level {
        match self {
            ApiError::Internal { .. } => log::Level::Error,
            ApiError::Forbidden { .. } => log::Level::Debug,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => log::Level::Warn,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::log!(self.log_level(), "{}", self);

        let status = self.status_code();
        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            ServiceError::Store { .. } => {
                log::error!("Profile store error: {}", e);
                ApiError::Internal {
                    message: SAVE_FAILED_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            ServiceError::Signing { .. } | ServiceError::Internal { .. } => {
                log::error!("Error generating token: {}", e);
                ApiError::Internal {
                    message: INTERNAL_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert auth gate denials to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Forbidden { .. } => ApiError::Forbidden {
                message: FORBIDDEN_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: INTERNAL_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
