//! REST API error types
//!
//! Every failure renders as `{ "error": { "code", "message", "field"? } }`.
//! Internal details are logged, never returned.

use hr_auth::AuthError;
use hr_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "FORBIDDEN", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400 for a specific request field
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400 with a domain-specific code
    #[error("Bad request ({code}): {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict ({code}): {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 429
    #[error("Too many requests, retry after {retry_after_secs}s {location}")]
    TooManyRequests {
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    /// 500. `message` is what the caller sees.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal() -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let mut retry_after = None;
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { code, message, .. }
            | ApiError::Unauthorized { code, message, .. }
            | ApiError::Conflict { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message,
                field: None,
            },
            ApiError::TooManyRequests {
                retry_after_secs, ..
            } => {
                retry_after = Some(retry_after_secs);
                ApiErrorBody {
                    code: "RATE_LIMITED".into(),
                    message: format!(
                        "Too many login attempts, retry in {} seconds",
                        retry_after_secs
                    ),
                    field: None,
                }
            }
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();

        match e {
            AuthError::DuplicateIdentity { .. } => ApiError::Conflict {
                code,
                message: "Username or email already exists".to_string(),
                location,
            },
            AuthError::RoleNotFound { role_id, .. } => ApiError::BadRequest {
                code,
                message: format!("Role with ID {} not found", role_id),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                code,
                message: "Invalid credentials".to_string(),
                location,
            },
            AuthError::AccountInactive { .. } => ApiError::Unauthorized {
                code,
                message: "User account is inactive".to_string(),
                location,
            },
            AuthError::Unauthenticated { reason, .. } => ApiError::Unauthorized {
                code,
                message: reason,
                location,
            },
            AuthError::Forbidden { message, .. } => ApiError::Forbidden { message, location },
            AuthError::RateLimited {
                retry_after_secs, ..
            } => ApiError::TooManyRequests {
                retry_after_secs,
                location,
            },
            AuthError::DefaultRoleMissing { .. }
            | AuthError::HashingFailure { .. }
            | AuthError::TokenIssuanceFailure { .. }
            | AuthError::InvalidConfiguration { .. }
            | AuthError::Store { .. } => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: INTERNAL_MESSAGE.to_string(),
                    location,
                }
            }
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", capitalize(entity), id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::UniqueViolation { message, .. } => ApiError::Conflict {
                code: "CONFLICT",
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
