use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLOCK_SKEW_SECS, DEFAULT_JWT_ALGORITHM,
    DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_ROLE, DEFAULT_TOKEN_TTL_HOURS, MAX_CLOCK_SKEW_SECS,
    MAX_PASSWORD_MIN_LENGTH, MAX_TOKEN_TTL_HOURS, MIN_JWT_SECRET_LENGTH,
    SUPPORTED_JWT_ALGORITHMS,
};

use serde::Deserialize;

/// Token signing and credential policy.
///
/// `Debug` never prints the signing secret.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_algorithm: String,
    pub token_ttl_hours: u64,
    /// Leeway applied to nbf/exp checks
    pub clock_skew_secs: u64,
    /// Role assigned when registration names none
    pub default_role: String,
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_algorithm: String::from(DEFAULT_JWT_ALGORITHM),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
            default_role: String::from(DEFAULT_ROLE),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "jwt_secret",
                &self.jwt_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("clock_skew_secs", &self.clock_skew_secs)
            .field("default_role", &self.default_role)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set HR_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        let algorithm = self.jwt_algorithm.to_ascii_uppercase();
        if !SUPPORTED_JWT_ALGORITHMS.contains(&algorithm.as_str()) {
            return Err(ConfigError::auth(format!(
                "auth.jwt_algorithm must be one of {:?}, got '{}'",
                SUPPORTED_JWT_ALGORITHMS, self.jwt_algorithm
            )));
        }

        if self.token_ttl_hours == 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be 1-{}, got {}",
                MAX_TOKEN_TTL_HOURS, self.token_ttl_hours
            )));
        }

        if self.clock_skew_secs > MAX_CLOCK_SKEW_SECS {
            return Err(ConfigError::auth(format!(
                "auth.clock_skew_secs must be 0-{}, got {}",
                MAX_CLOCK_SKEW_SECS, self.clock_skew_secs
            )));
        }

        if self.default_role.trim().is_empty() {
            return Err(ConfigError::auth("auth.default_role cannot be empty"));
        }

        if self.password_min_length == 0 || self.password_min_length > MAX_PASSWORD_MIN_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.password_min_length must be 1-{}, got {}",
                MAX_PASSWORD_MIN_LENGTH, self.password_min_length
            )));
        }

        Ok(())
    }

    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_hours * 60 * 60
    }
}
