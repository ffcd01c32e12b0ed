use crate::{ConfigError, ConfigErrorResult, DEFAULT_GOD_ADMIN_USERNAME, DEFAULT_SEED_ENABLED};

use serde::Deserialize;

/// Bootstrap data written at startup: the fixed roles and the break-glass account
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub god_admin_username: String,
    pub god_admin_email: Option<String>,
    pub god_admin_password: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SEED_ENABLED,
            god_admin_username: String::from(DEFAULT_GOD_ADMIN_USERNAME),
            god_admin_email: None,
            god_admin_password: None,
        }
    }
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("enabled", &self.enabled)
            .field("god_admin_username", &self.god_admin_username)
            .field("god_admin_email", &self.god_admin_email)
            .field(
                "god_admin_password",
                &self.god_admin_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled && self.god_admin_username.trim().is_empty() {
            return Err(ConfigError::seed("seed.god_admin_username cannot be empty"));
        }

        Ok(())
    }

    /// Email and password of the break-glass account, when both are configured
    pub fn god_admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.god_admin_email, &self.god_admin_password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email.as_str(), password.as_str()))
            }
            _ => None,
        }
    }
}
