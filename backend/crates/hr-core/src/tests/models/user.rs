use crate::{NewUser, Role, RoleName, User};

use chrono::Utc;
use uuid::Uuid;

fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_active: true,
        role_id: Uuid::new_v4(),
        role_name: "staff".to_string(),
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_user_serialization_omits_password_hash() {
    let user = sample_user();

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["username"], "alice");
    assert_eq!(json["role_name"], "staff");
    assert!(json["last_login"].is_null());
}

#[test]
fn test_role_from_name_uses_canonical_spelling() {
    let role = Role::from_name(RoleName::GodAdmin);

    assert_eq!(role.name, "god-admin");
    assert_eq!(role.description, RoleName::GodAdmin.description());
    assert_eq!(role.created_at, role.updated_at);
}

#[test]
fn test_new_user_active_sets_active_flag() {
    let role_id = Uuid::new_v4();

    let user = NewUser::active("bob", "bob@example.com", "hash".to_string(), role_id);

    assert!(user.is_active);
    assert_eq!(user.role_id, role_id);
    assert_eq!(user.username, "bob");
}
