use hr_core::User;

use serde::Serialize;

/// Full account view; never includes the password hash
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub role_id: String,
    pub role_name: String,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            is_active: u.is_active,
            role_id: u.role_id.to_string(),
            role_name: u.role_name,
            last_login: u.last_login.map(|t| t.timestamp()),
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
