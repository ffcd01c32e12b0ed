//! Persistence boundary for users and roles.
//!
//! The authentication core depends only on this trait; the SQLite
//! implementation lives in `hr-db`.

use crate::{NewUser, Result as CoreErrorResult, Role, User};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// True when either the username or the email is already taken
    async fn identity_exists(&self, username: &str, email: &str) -> CoreErrorResult<bool>;

    /// Single lookup matching `identifier` against username OR email
    async fn find_user_by_identifier(&self, identifier: &str) -> CoreErrorResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> CoreErrorResult<Option<User>>;

    async fn find_role_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Role>>;

    async fn find_role_by_name(&self, name: &str) -> CoreErrorResult<Option<Role>>;

    /// Persist a new user. A unique-constraint collision is reported as
    /// `CoreError::Conflict`.
    async fn create_user(&self, user: &NewUser) -> CoreErrorResult<User>;

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> CoreErrorResult<()>;

    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str)
    -> CoreErrorResult<()>;
}
