mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod password_config;
mod rate_limit_config;
mod seed_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use password_config::PasswordConfig;
pub use rate_limit_config::RateLimitConfig;
pub use seed_config::SeedConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "HR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hr";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "hr.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_JWT_ALGORITHM: &str = "HS256";
const SUPPORTED_JWT_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 168;
const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;
const DEFAULT_CLOCK_SKEW_SECS: u64 = 0;
const MAX_CLOCK_SKEW_SECS: u64 = 300;
const DEFAULT_ROLE: &str = "staff";
const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
const MAX_PASSWORD_MIN_LENGTH: usize = 128;

const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19_456;
const MIN_ARGON2_MEMORY_KIB: u32 = 8;
const DEFAULT_ARGON2_ITERATIONS: u32 = 2;
const DEFAULT_ARGON2_PARALLELISM: u32 = 1;
const MAX_ARGON2_PARALLELISM: u32 = 16;

const DEFAULT_LOGIN_RATE_LIMIT_ENABLED: bool = true;
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 10;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 10_000;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const MAX_LOGIN_WINDOW_SECS: u64 = 3600;

const DEFAULT_SEED_ENABLED: bool = true;
const DEFAULT_GOD_ADMIN_USERNAME: &str = "godadmin";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
