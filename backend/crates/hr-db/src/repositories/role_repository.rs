use crate::{DbError, Result as DbErrorResult};

use hr_core::{Role, RoleName};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_ROLE: &str = "SELECT id, name, description, created_at, updated_at FROM hr_roles";

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, role: &Role) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                INSERT INTO hr_roles (id, name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(role.id.to_string())
        .bind(&role.name)
        .bind(&role.description)
        .bind(role.created_at.timestamp())
        .bind(role.updated_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::UniqueViolation {
                    message: format!("role '{}' already exists", role.name),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Insert the role if no role with that name exists, then return the stored row
    pub async fn ensure(&self, name: RoleName) -> DbErrorResult<Role> {
        let role = Role::from_name(name);

        sqlx::query(
            r#"
                INSERT OR IGNORE INTO hr_roles (id, name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(role.id.to_string())
        .bind(&role.name)
        .bind(&role.description)
        .bind(role.created_at.timestamp())
        .bind(role.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        self.find_by_name(name.as_str())
            .await?
            .ok_or_else(|| DbError::not_found("role", name))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query(&format!("{SELECT_ROLE} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(role_from_row).transpose()
    }

    pub async fn find_by_name(&self, name: &str) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query(&format!("{SELECT_ROLE} WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(role_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Role>> {
        let rows = sqlx::query(&format!("{SELECT_ROLE} ORDER BY created_at ASC, name ASC"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(role_from_row).collect()
    }
}

fn role_from_row(row: &SqliteRow) -> DbErrorResult<Role> {
    let id: String = row.try_get("id")?;

    Ok(Role {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::decode("hr_roles", format!("invalid UUID in id: {e}")))?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::decode("hr_roles", format!("invalid timestamp in {column}")))
}
