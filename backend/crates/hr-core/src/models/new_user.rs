use uuid::Uuid;

/// Write model for a user that does not exist yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: Uuid,
    pub is_active: bool,
}

impl NewUser {
    pub fn active(username: &str, email: &str, password_hash: String, role_id: Uuid) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role_id,
            is_active: true,
        }
    }
}
