use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserDto,
}
