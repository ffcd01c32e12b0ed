use hr_core::{NewUser, Role, RoleName};
use hr_db::RoleRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn seed_role(pool: &SqlitePool, name: RoleName) -> Role {
    RoleRepository::new(pool.clone())
        .ensure(name)
        .await
        .expect("Failed to seed role")
}

pub fn new_user(username: &str, email: &str, role_id: Uuid) -> NewUser {
    NewUser::active(
        username,
        email,
        "$argon2id$v=19$m=64,t=1,p=1$c29tZXNhbHQ$aGFzaGhhc2hoYXNo".to_string(),
        role_id,
    )
}
