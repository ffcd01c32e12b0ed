use crate::TokenError;

use hr_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username or email already exists {location}")]
    DuplicateIdentity { location: ErrorLocation },

    /// The configured default role is not in the store (un-seeded deployment)
    #[error("Default '{role}' role not found, ensure roles are seeded {location}")]
    DefaultRoleMissing {
        role: String,
        location: ErrorLocation,
    },

    #[error("Role with ID {role_id} not found {location}")]
    RoleNotFound {
        role_id: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User account is inactive {location}")]
    AccountInactive { location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    HashingFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token issuance failed: {source} {location}")]
    TokenIssuanceFailure {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    /// Request carried no usable identity. `reason` is safe to show the caller.
    #[error("Unauthenticated: {reason} {location}")]
    Unauthenticated {
        reason: String,
        #[source]
        token_error: Option<TokenError>,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Too many login attempts, retry in {retry_after_secs}s {location}")]
    RateLimited {
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    #[error("Invalid auth configuration: {message} {location}")]
    InvalidConfiguration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store failure: {source} {location}")]
    Store {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::DefaultRoleMissing { .. } => "DEFAULT_ROLE_MISSING",
            Self::RoleNotFound { .. } => "ROLE_NOT_FOUND",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::AccountInactive { .. } => "ACCOUNT_INACTIVE",
            Self::HashingFailure { .. } => "HASHING_FAILURE",
            Self::TokenIssuanceFailure { .. } => "TOKEN_ISSUANCE_FAILURE",
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    #[track_caller]
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
            token_error: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TokenError> for AuthError {
    #[track_caller]
    fn from(err: TokenError) -> Self {
        Self::Unauthenticated {
            reason: err.reason().to_string(),
            token_error: Some(err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
