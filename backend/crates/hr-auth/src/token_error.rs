use thiserror::Error;

/// Why a token was rejected.
///
/// Each case stays distinguishable for logging; callers only ever see the
/// collapsed `reason()` text behind a 401.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed: {detail}")]
    Malformed { detail: String },

    #[error("token signing algorithm is not supported")]
    UnsupportedAlgorithm,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token not valid before {nbf}")]
    NotYetValid { nbf: i64 },

    #[error("token expired at {exp}")]
    Expired { exp: i64 },

    #[error("invalid claim '{claim}': {message}")]
    InvalidClaim { claim: String, message: String },
}

impl TokenError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Malformed { .. } | Self::InvalidClaim { .. } => "Token is malformed",
            Self::Expired { .. } => "Token has expired",
            Self::NotYetValid { .. } => "Token not yet valid",
            Self::UnsupportedAlgorithm | Self::InvalidSignature => {
                "Token signature is invalid or signing method is not supported"
            }
        }
    }

    pub fn is_expiry(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                Self::UnsupportedAlgorithm
            }
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed {
                detail: err.to_string(),
            },
        }
    }
}
