use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, PasswordConfig, RateLimitConfig,
    SeedConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read `.env` from the working directory if present
    /// 2. Check for HR_CONFIG_DIR env var, else use ./.hr/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply HR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Existing process variables win over .env entries
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: HR_CONFIG_DIR env var > ./.hr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.password.validate()?;
        self.rate_limit.validate()?;
        self.seed.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {} ttl={}h skew={}s default_role={} secret={}",
            self.auth.jwt_algorithm.to_ascii_uppercase(),
            self.auth.token_ttl_hours,
            self.auth.clock_skew_secs,
            self.auth.default_role,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  password: argon2id m={}KiB t={} p={}",
            self.password.memory_kib, self.password.iterations, self.password.parallelism
        );
        if self.rate_limit.login_enabled {
            info!(
                "  rate_limit: login {}/{}s",
                self.rate_limit.login_max_attempts, self.rate_limit.login_window_secs
            );
        } else {
            info!("  rate_limit: login disabled");
        }
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  seed: {} (god admin: {})",
            if self.seed.enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.seed.god_admin_credentials().is_some() {
                self.seed.god_admin_username.as_str()
            } else {
                "not configured"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("HR_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "HR_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("HR_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("HR_AUTH_JWT_ALGORITHM", &mut self.auth.jwt_algorithm);
        Self::apply_env_parse("HR_AUTH_TOKEN_TTL_HOURS", &mut self.auth.token_ttl_hours);
        Self::apply_env_parse("HR_AUTH_CLOCK_SKEW_SECS", &mut self.auth.clock_skew_secs);
        Self::apply_env_string("HR_AUTH_DEFAULT_ROLE", &mut self.auth.default_role);
        Self::apply_env_parse(
            "HR_AUTH_PASSWORD_MIN_LENGTH",
            &mut self.auth.password_min_length,
        );

        // Password hashing
        Self::apply_env_parse("HR_PASSWORD_MEMORY_KIB", &mut self.password.memory_kib);
        Self::apply_env_parse("HR_PASSWORD_ITERATIONS", &mut self.password.iterations);
        Self::apply_env_parse("HR_PASSWORD_PARALLELISM", &mut self.password.parallelism);

        // Rate limit
        Self::apply_env_bool(
            "HR_RATE_LIMIT_LOGIN_ENABLED",
            &mut self.rate_limit.login_enabled,
        );
        Self::apply_env_parse(
            "HR_RATE_LIMIT_LOGIN_MAX_ATTEMPTS",
            &mut self.rate_limit.login_max_attempts,
        );
        Self::apply_env_parse(
            "HR_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Logging
        Self::apply_env_parse("HR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HR_LOG_FILE", &mut self.logging.file);

        // Seed
        Self::apply_env_bool("HR_SEED_ENABLED", &mut self.seed.enabled);
        Self::apply_env_string(
            "HR_SEED_GOD_ADMIN_USERNAME",
            &mut self.seed.god_admin_username,
        );
        Self::apply_env_option_string("HR_SEED_GOD_ADMIN_EMAIL", &mut self.seed.god_admin_email);
        Self::apply_env_option_string(
            "HR_SEED_GOD_ADMIN_PASSWORD",
            &mut self.seed.god_admin_password,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
