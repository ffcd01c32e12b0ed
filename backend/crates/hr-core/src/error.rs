use std::error::Error as StdError;
use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role name: {value} {location}")]
    InvalidRoleName {
        value: String,
        location: ErrorLocation,
    },

    /// A unique constraint rejected the write (username or email already taken)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store error: {message}: {source} {location}")]
    Store {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Wrap a backend error with context
    #[track_caller]
    pub fn store<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Store {
            message: message.into(),
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
