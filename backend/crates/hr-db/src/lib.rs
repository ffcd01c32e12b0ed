pub mod connection;
pub mod credential_store;
pub mod error;
pub mod repositories;
pub mod seeder;

pub use connection::sqlite_pool::{connect, connect_in_memory, migrate, ping};
pub use credential_store::SqliteCredentialStore;
pub use error::{DbError, Result};
pub use repositories::role_repository::RoleRepository;
pub use repositories::user_repository::UserRepository;
pub use seeder::{GodAdminSeed, Seeder};
