use crate::UserCompactDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserCompactDto,
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until `access_token` expires
    pub expires_in: i64,
    /// Reserved; never issued yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}
