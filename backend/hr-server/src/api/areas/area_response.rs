use hr_auth::IdentityContext;

use serde::Serialize;

/// Payload of the role-gated area endpoints
#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub area: &'static str,
    pub message: String,
    pub viewer: String,
    pub role: String,
}

impl AreaResponse {
    pub fn new(area: &'static str, message: impl Into<String>, identity: IdentityContext) -> Self {
        Self {
            area,
            message: message.into(),
            viewer: identity.username,
            role: identity.role,
        }
    }
}
