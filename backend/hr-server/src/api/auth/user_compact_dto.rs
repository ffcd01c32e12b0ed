use hr_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserCompactDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role_name: String,
    pub is_active: bool,
}

impl From<User> for UserCompactDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            role_name: u.role_name,
            is_active: u.is_active,
        }
    }
}
