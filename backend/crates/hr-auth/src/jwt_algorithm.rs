use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use jsonwebtoken::Algorithm;

/// Supported token signing algorithms (shared-secret HMAC only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JwtAlgorithm {
    #[default]
    HS256,
    HS384,
    HS512,
}

impl JwtAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::HS256 => Algorithm::HS256,
            Self::HS384 => Algorithm::HS384,
            Self::HS512 => Algorithm::HS512,
        }
    }
}

impl FromStr for JwtAlgorithm {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(AuthError::InvalidConfiguration {
                message: format!("unsupported JWT algorithm '{s}', expected HS256, HS384 or HS512"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for JwtAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
