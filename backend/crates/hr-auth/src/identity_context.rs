use crate::{Claims, TokenError};

use uuid::Uuid;

/// Identity of the caller for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<Claims> for IdentityContext {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.user_id).map_err(|e| TokenError::InvalidClaim {
            claim: "user_id".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            user_id,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        })
    }
}
