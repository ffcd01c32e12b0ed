//! Bootstrap data: the fixed role set and the break-glass administrator.
//!
//! Both steps are idempotent and safe to run on every startup.

use crate::{DbError, Result as DbErrorResult, RoleRepository, UserRepository};

use hr_core::{NewUser, RoleName, User};

use sqlx::SqlitePool;

/// What `seed_god_admin` did
#[derive(Debug, Clone)]
pub enum GodAdminSeed {
    Created(User),
    /// An account with the configured email existed and now holds the god-admin role
    Promoted(User),
    /// An account with the configured email already held the god-admin role
    Unchanged(User),
}

pub struct Seeder {
    roles: RoleRepository,
    users: UserRepository,
}

impl Seeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            roles: RoleRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Insert any of the fixed roles that are missing; returns how many were added
    pub async fn seed_roles(&self) -> DbErrorResult<usize> {
        let mut created = 0;

        for name in RoleName::ALL {
            if self.roles.find_by_name(name.as_str()).await?.is_some() {
                continue;
            }
            self.roles.ensure(name).await?;
            log::info!("Seeded role '{}'", name);
            created += 1;
        }

        Ok(created)
    }

    /// Ensure the break-glass account exists with the god-admin role.
    ///
    /// The account is matched by email. `password_hash` is only used when the
    /// account has to be created.
    pub async fn seed_god_admin(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> DbErrorResult<GodAdminSeed> {
        let role = self
            .roles
            .find_by_name(RoleName::GodAdmin.as_str())
            .await?
            .ok_or_else(|| DbError::not_found("role", RoleName::GodAdmin))?;

        if let Some(existing) = self.users.find_by_identifier(email).await?
            && existing.email.eq_ignore_ascii_case(email)
        {
            if existing.role_id == role.id {
                return Ok(GodAdminSeed::Unchanged(existing));
            }

            self.users.update_role(existing.id, role.id).await?;
            log::info!(
                "Promoted existing user {} to '{}'",
                existing.id,
                RoleName::GodAdmin
            );
            let promoted = self
                .users
                .find_by_id(existing.id)
                .await?
                .ok_or_else(|| DbError::not_found("user", existing.id))?;
            return Ok(GodAdminSeed::Promoted(promoted));
        }

        let user = self
            .users
            .create(&NewUser::active(
                username,
                email,
                password_hash.to_string(),
                role.id,
            ))
            .await?;
        log::info!("Created god admin account {} ({})", user.id, user.username);

        Ok(GodAdminSeed::Created(user))
    }
}
