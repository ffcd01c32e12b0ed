pub mod auth_service;
pub mod authentication;
pub mod authorization;
pub mod claims;
pub mod clock;
pub mod error;
pub mod fixed_clock;
pub mod identity_context;
pub mod jwt_algorithm;
pub mod login_command;
pub mod login_outcome;
pub mod login_rate_limiter;
pub mod password_hasher;
pub mod register_command;
pub mod role_allow_list;
pub mod system_clock;
pub mod token_codec;
pub mod token_error;

pub use auth_service::AuthService;
pub use authentication::authenticate;
pub use authorization::authorize;
pub use claims::Claims;
pub use clock::Clock;
pub use error::{AuthError, Result};
pub use fixed_clock::FixedClock;
pub use identity_context::IdentityContext;
pub use jwt_algorithm::JwtAlgorithm;
pub use login_command::LoginCommand;
pub use login_outcome::LoginOutcome;
pub use login_rate_limiter::LoginRateLimiter;
pub use password_hasher::PasswordHasher;
pub use register_command::RegisterCommand;
pub use role_allow_list::RoleAllowList;
pub use system_clock::SystemClock;
pub use token_codec::TokenCodec;
pub use token_error::TokenError;

#[cfg(test)]
mod tests;
