//! Startup wiring from [`Config`] to a ready [`AuthService`].

use crate::error::Result as ServerErrorResult;

use hr_auth::{
    AuthService, JwtAlgorithm, LoginRateLimiter, PasswordHasher, SystemClock, TokenCodec,
};
use hr_config::{Config, ConfigError};
use hr_db::{GodAdminSeed, Seeder, SqliteCredentialStore};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

pub fn password_hasher(config: &Config) -> ServerErrorResult<PasswordHasher> {
    Ok(PasswordHasher::new(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?)
}

/// The signing secret is read here once and lives only inside the codec
pub fn token_codec(config: &Config) -> ServerErrorResult<TokenCodec> {
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("jwt_secret is required"))?;
    let algorithm: JwtAlgorithm = config.auth.jwt_algorithm.parse()?;

    Ok(TokenCodec::new(
        secret.as_bytes(),
        algorithm,
        Duration::from_secs(config.auth.token_ttl_secs()),
        Duration::from_secs(config.auth.clock_skew_secs),
        Arc::new(SystemClock),
    ))
}

pub fn login_rate_limiter(config: &Config) -> Option<Arc<LoginRateLimiter>> {
    config.rate_limit.login_enabled.then(|| {
        Arc::new(LoginRateLimiter::new(
            config.rate_limit.login_max_attempts,
            Duration::from_secs(config.rate_limit.login_window_secs),
        ))
    })
}

pub fn auth_service(
    config: &Config,
    pool: SqlitePool,
    hasher: PasswordHasher,
    limiter: Option<Arc<LoginRateLimiter>>,
) -> ServerErrorResult<AuthService> {
    let store = Arc::new(SqliteCredentialStore::new(pool));
    let codec = Arc::new(token_codec(config)?);

    let service = AuthService::new(store, hasher, codec, config.auth.default_role.clone());
    Ok(match limiter {
        Some(limiter) => service.with_rate_limiter(limiter),
        None => service,
    })
}

/// Seed the fixed roles and, when credentials are configured, the god admin
pub async fn seed(
    config: &Config,
    pool: &SqlitePool,
    hasher: &PasswordHasher,
) -> ServerErrorResult<()> {
    if !config.seed.enabled {
        log::info!("Seeding disabled");
        return Ok(());
    }

    let seeder = Seeder::new(pool.clone());
    let created = seeder.seed_roles().await?;
    log::info!("Role seeding complete ({} added)", created);

    let Some((email, password)) = config.seed.god_admin_credentials() else {
        log::info!("God admin credentials not configured, skipping account seed");
        return Ok(());
    };

    let password_hash = hasher.hash(password)?;
    match seeder
        .seed_god_admin(&config.seed.god_admin_username, email, &password_hash)
        .await?
    {
        GodAdminSeed::Created(user) => log::info!("God admin {} created", user.username),
        GodAdminSeed::Promoted(user) => {
            log::warn!("Existing user {} promoted to god admin", user.username)
        }
        GodAdminSeed::Unchanged(user) => log::info!("God admin {} already present", user.username),
    }

    Ok(())
}
