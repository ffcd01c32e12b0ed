//! User persistence.
//!
//! Every read joins `hr_roles` so the returned [`User`] carries its role name.
//! Username and email columns use `COLLATE NOCASE`, so uniqueness and
//! identifier lookups ignore ASCII case.

use crate::{DbError, Result as DbErrorResult};

use hr_core::{NewUser, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_USER: &str = r#"
    SELECT u.id, u.username, u.email, u.password_hash, u.is_active, u.role_id,
        r.name AS role_name, u.last_login, u.created_at, u.updated_at
    FROM hr_users u
    JOIN hr_roles r ON r.id = u.role_id
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert and return the stored user with its role resolved
    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let id = Uuid::new_v4();
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO hr_users (
                    id, username, email, password_hash, is_active, role_id,
                    last_login, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, NULL, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.role_id.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(DbError::UniqueViolation {
                    message: "username or email already exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                return Err(DbError::not_found("role", user.role_id));
            }
            Err(e) => return Err(e.into()),
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("{SELECT_USER} WHERE u.id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Match `identifier` against username OR email in one query.
    ///
    /// Registration keeps the two namespaces disjoint. If older rows still
    /// collide, the earliest account wins.
    pub async fn find_by_identifier(&self, identifier: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "{SELECT_USER} WHERE u.username = ?1 OR u.email = ?1 \
             ORDER BY u.created_at ASC, u.id ASC LIMIT 1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// True when either value is already taken as a username OR an email
    pub async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hr_users \
             WHERE username IN (?1, ?2) OR email IN (?1, ?2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "{SELECT_USER} ORDER BY u.created_at ASC, u.username ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    pub async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE hr_users SET last_login = ? WHERE id = ?")
            .bind(at.timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        require_row(result, id)
    }

    pub async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> DbErrorResult<()> {
        let result =
            sqlx::query("UPDATE hr_users SET password_hash = ?, updated_at = ? WHERE id = ?")
                .bind(password_hash)
                .bind(Utc::now().timestamp())
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        require_row(result, id)
    }

    pub async fn update_role(&self, id: Uuid, role_id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE hr_users SET role_id = ?, updated_at = ? WHERE id = ?")
            .bind(role_id.to_string())
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(result) => require_row(result, id),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                Err(DbError::not_found("role", role_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Soft (de)activation; users are never deleted
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE hr_users SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        require_row(result, id)
    }
}

#[track_caller]
fn require_row(result: SqliteQueryResult, id: Uuid) -> DbErrorResult<()> {
    if result.rows_affected() == 0 {
        return Err(DbError::not_found("user", id));
    }
    Ok(())
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role_id: String = row.try_get("role_id")?;
    let last_login: Option<i64> = row.try_get("last_login")?;

    Ok(User {
        id: parse_uuid(&id, "id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        is_active: row.try_get("is_active")?,
        role_id: parse_uuid(&role_id, "role_id")?,
        role_name: row.try_get("role_name")?,
        last_login: last_login
            .map(|secs| timestamp(secs, "last_login"))
            .transpose()?,
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}

fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::decode("hr_users", format!("invalid UUID in {column}: {e}")))
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::decode("hr_users", format!("invalid timestamp in {column}")))
}
