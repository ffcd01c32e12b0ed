use crate::{RoleRepository, UserRepository};

use hr_core::{CredentialStore, NewUser, Result as CoreErrorResult, Role, User};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// [`CredentialStore`] over the SQLite user and role repositories
pub struct SqliteCredentialStore {
    users: UserRepository,
    roles: RoleRepository,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            roles: RoleRepository::new(pool),
        }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn identity_exists(&self, username: &str, email: &str) -> CoreErrorResult<bool> {
        Ok(self
            .users
            .exists_by_username_or_email(username, email)
            .await?)
    }

    async fn find_user_by_identifier(&self, identifier: &str) -> CoreErrorResult<Option<User>> {
        Ok(self.users.find_by_identifier(identifier).await?)
    }

    async fn find_user_by_id(&self, id: Uuid) -> CoreErrorResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    async fn find_role_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Role>> {
        Ok(self.roles.find_by_id(id).await?)
    }

    async fn find_role_by_name(&self, name: &str) -> CoreErrorResult<Option<Role>> {
        Ok(self.roles.find_by_name(name).await?)
    }

    async fn create_user(&self, user: &NewUser) -> CoreErrorResult<User> {
        Ok(self.users.create(user).await?)
    }

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> CoreErrorResult<()> {
        Ok(self.users.update_last_login(user_id, at).await?)
    }

    async fn update_password_hash(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> CoreErrorResult<()> {
        Ok(self.users.update_password_hash(user_id, password_hash).await?)
    }
}
