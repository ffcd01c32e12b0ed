use crate::TokenError;

use hr_core::User;

use serde::{Deserialize, Serialize};

/// Token payload issued at login and trusted for the rest of its lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    /// Role name resolved at login
    pub role: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Not before (Unix seconds)
    pub nbf: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, issued_at: i64, expires_at: i64) -> Self {
        let id = user.id.to_string();
        Self {
            sub: id.clone(),
            user_id: id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role_name.clone(),
            iat: issued_at,
            nbf: issued_at,
            exp: expires_at,
        }
    }

    /// Structural checks run after the signature has been verified
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.sub.is_empty() {
            return Err(TokenError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
            });
        }
        if self.sub != self.user_id {
            return Err(TokenError::InvalidClaim {
                claim: "user_id".to_string(),
                message: "user_id must match sub".to_string(),
            });
        }
        if self.exp <= self.iat {
            return Err(TokenError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
            });
        }

        Ok(())
    }
}
