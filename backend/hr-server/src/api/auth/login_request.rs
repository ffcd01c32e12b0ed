use crate::ApiResult;
use crate::api::auth::register_request::{check_password_length, required};

use hr_auth::LoginCommand;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    /// Username or email
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn into_command(self, password_min_length: usize) -> ApiResult<LoginCommand> {
        let identifier = required("identifier", &self.identifier)?;
        required("password", &self.password)?;
        check_password_length(&self.password, password_min_length)?;

        Ok(LoginCommand {
            identifier,
            password: self.password,
            client: None,
        })
    }
}
