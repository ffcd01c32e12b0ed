use hr_auth::IdentityContext;

use serde::Serialize;

/// The caller as the token describes them
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<IdentityContext> for MeResponse {
    fn from(identity: IdentityContext) -> Self {
        Self {
            user_id: identity.user_id.to_string(),
            username: identity.username,
            email: identity.email,
            role: identity.role,
        }
    }
}
