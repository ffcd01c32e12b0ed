use crate::{ApiError, ApiResult};

use hr_auth::RegisterCommand;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Role UUID; the configured default role when absent
    #[serde(default)]
    pub role_id: Option<String>,
}

impl RegisterRequest {
    /// Reject blank fields and short passwords before anything touches the store
    pub fn into_command(self, password_min_length: usize) -> ApiResult<RegisterCommand> {
        let username = required("username", &self.username)?;
        let email = required("email", &self.email)?;
        required("password", &self.password)?;
        check_password_length(&self.password, password_min_length)?;

        let role_id = match self.role_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                Uuid::parse_str(raw)
                    .map_err(|_| ApiError::validation("role_id", "role_id must be a valid UUID"))?,
            ),
        };

        Ok(RegisterCommand {
            username,
            email,
            password: self.password,
            role_id,
        })
    }
}

/// Trimmed value, or a validation error naming `field` when blank
pub(crate) fn required(field: &str, value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(field, format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn check_password_length(password: &str, min_length: usize) -> ApiResult<()> {
    if password.chars().count() < min_length {
        return Err(ApiError::validation(
            "password",
            format!("password must be at least {min_length} characters"),
        ));
    }
    Ok(())
}
