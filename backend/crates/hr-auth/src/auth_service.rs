use crate::{
    AuthError, LoginCommand, LoginOutcome, LoginRateLimiter, PasswordHasher, RegisterCommand,
    Result as AuthErrorResult, TokenCodec,
};

use hr_core::{CoreError, CredentialStore, NewUser, Role, User};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Registration and login over a [`CredentialStore`].
///
/// Errors that could reveal whether an identifier exists are folded into
/// `InvalidCredentials`. Hashing runs on the blocking pool.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    codec: Arc<TokenCodec>,
    default_role: String,
    rate_limiter: Option<Arc<LoginRateLimiter>>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        codec: Arc<TokenCodec>,
        default_role: impl Into<String>,
    ) -> Self {
        Self {
            store,
            hasher,
            codec,
            default_role: default_role.into(),
            rate_limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<LoginRateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    pub fn codec(&self) -> &Arc<TokenCodec> {
        &self.codec
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    pub async fn register(&self, cmd: RegisterCommand) -> AuthErrorResult<User> {
        if self.store.identity_exists(&cmd.username, &cmd.email).await? {
            return Err(AuthError::DuplicateIdentity {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let role = self.resolve_role(&cmd).await?;
        let password_hash = self.hash_password(cmd.password).await?;
        let new_user = NewUser::active(&cmd.username, &cmd.email, password_hash, role.id);

        let user = match self.store.create_user(&new_user).await {
            Ok(user) => user,
            // Lost a race with a concurrent registration
            Err(CoreError::Conflict { .. }) => {
                return Err(AuthError::DuplicateIdentity {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        };

        log::info!(
            "Registered user {} ({}) with role {}",
            user.id,
            user.username,
            user.role_name
        );

        Ok(user)
    }

    async fn resolve_role(&self, cmd: &RegisterCommand) -> AuthErrorResult<Role> {
        match cmd.role_id {
            None => self
                .store
                .find_role_by_name(&self.default_role)
                .await?
                .ok_or_else(|| AuthError::DefaultRoleMissing {
                    role: self.default_role.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            Some(role_id) => {
                self.store
                    .find_role_by_id(role_id)
                    .await?
                    .ok_or_else(|| AuthError::RoleNotFound {
                        role_id: role_id.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
        }
    }

    pub async fn login(&self, cmd: LoginCommand) -> AuthErrorResult<LoginOutcome> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.check(cmd.client, &cmd.identifier)?;
        }

        let Some(mut user) = self.store.find_user_by_identifier(&cmd.identifier).await? else {
            self.verify_dummy(cmd.password).await;
            log::info!("Login rejected: invalid credentials");
            return Err(AuthError::invalid_credentials());
        };

        let password_ok = self
            .verify_password(user.password_hash.clone(), cmd.password.clone())
            .await?;
        if !password_ok {
            log::info!("Login rejected: invalid credentials");
            return Err(AuthError::invalid_credentials());
        }

        if !user.is_active {
            log::info!("Login rejected: account {} is inactive", user.id);
            return Err(AuthError::AccountInactive {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = self.codec.now();
        match self.store.record_login(user.id, now).await {
            Ok(()) => user.last_login = Some(now),
            Err(e) => log::warn!("Failed to record last login for {}: {}", user.id, e),
        }

        self.rehash_if_stale(&user, cmd.password).await;

        let claims = self.codec.claims_for(&user);
        let access_token = self.codec.issue(&claims)?;

        log::info!("User {} ({}) logged in", user.id, user.username);

        Ok(LoginOutcome {
            user,
            access_token,
            refresh_token: None,
        })
    }

    async fn hash_password(&self, password: String) -> AuthErrorResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::HashingFailure {
                message: format!("hashing task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    async fn verify_password(&self, hash: String, password: String) -> AuthErrorResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password))
            .await
            .map_err(|e| AuthError::HashingFailure {
                message: format!("verification task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn verify_dummy(&self, password: String) {
        let hasher = self.hasher.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_dummy(&password)).await {
            log::warn!("Dummy verification task failed: {}", e);
        }
    }

    /// Best-effort upgrade of a hash produced under older cost parameters
    async fn rehash_if_stale(&self, user: &User, password: String) {
        if !self.hasher.needs_rehash(&user.password_hash) {
            return;
        }

        let rehashed = match self.hash_password(password).await {
            Ok(hash) => hash,
            Err(e) => {
                log::warn!("Failed to rehash password for {}: {}", user.id, e);
                return;
            }
        };

        match self.store.update_password_hash(user.id, &rehashed).await {
            Ok(()) => log::debug!("Upgraded password hash parameters for {}", user.id),
            Err(e) => log::warn!("Failed to store rehashed password for {}: {}", user.id, e),
        }
    }
}
