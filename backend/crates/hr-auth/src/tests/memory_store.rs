use hr_core::{CoreError, CredentialStore, NewUser, Result as CoreErrorResult, Role, RoleName, User};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Credential store backed by vectors, matching identities case-insensitively
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) users: Mutex<Vec<User>>,
    pub(crate) roles: Mutex<Vec<Role>>,
    pub(crate) fail_record_login: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn with_roles(names: &[RoleName]) -> Self {
        let store = Self::default();
        store
            .roles
            .lock()
            .unwrap()
            .extend(names.iter().map(|name| Role::from_name(*name)));
        store
    }

    pub(crate) fn role_id(&self, name: RoleName) -> Uuid {
        self.roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name.as_str())
            .map(|r| r.id)
            .unwrap()
    }

    pub(crate) fn user(&self, username: &str) -> User {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .unwrap()
    }

    pub(crate) fn set_active(&self, username: &str, active: bool) {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.username == username {
                user.is_active = active;
            }
        }
    }

    pub(crate) fn set_password_hash(&self, username: &str, hash: &str) {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.username == username {
                user.password_hash = hash.to_string();
            }
        }
    }
}

trait MatchesIdentity {
    fn matches(&self, value: &str) -> bool;
}

impl MatchesIdentity for User {
    fn matches(&self, value: &str) -> bool {
        self.username.eq_ignore_ascii_case(value) || self.email.eq_ignore_ascii_case(value)
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn identity_exists(&self, username: &str, email: &str) -> CoreErrorResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| [username, email].iter().any(|value| u.matches(value))))
    }

    async fn find_user_by_identifier(&self, identifier: &str) -> CoreErrorResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.matches(identifier))
            .cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> CoreErrorResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_role_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Role>> {
        Ok(self.roles.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> CoreErrorResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn create_user(&self, user: &NewUser) -> CoreErrorResult<User> {
        let role = self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == user.role_id)
            .cloned()
            .ok_or_else(|| CoreError::conflict("unknown role"))?;

        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.matches(&user.username) || u.matches(&user.email))
        {
            return Err(CoreError::conflict("username or email already exists"));
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            is_active: user.is_active,
            role_id: role.id,
            role_name: role.name,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> CoreErrorResult<()> {
        if self.fail_record_login.load(Ordering::SeqCst) {
            return Err(CoreError::store(
                "record login",
                std::io::Error::other("disk full"),
            ));
        }
        for user in self.users.lock().unwrap().iter_mut() {
            if user.id == user_id {
                user.last_login = Some(at);
            }
        }
        Ok(())
    }

    async fn update_password_hash(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> CoreErrorResult<()> {
        for user in self.users.lock().unwrap().iter_mut() {
            if user.id == user_id {
                user.password_hash = password_hash.to_string();
            }
        }
        Ok(())
    }
}
