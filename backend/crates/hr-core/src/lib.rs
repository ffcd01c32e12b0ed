pub mod credential_store;
pub mod error;
pub mod models;

pub use credential_store::CredentialStore;
pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::role::Role;
pub use models::role_name::RoleName;
pub use models::user::User;

#[cfg(test)]
mod tests;
