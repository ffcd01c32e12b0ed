use hr_auth::{AuthService, TokenCodec};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared by every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<AuthService>,
    pub password_min_length: usize,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth: Arc<AuthService>, password_min_length: usize) -> Self {
        Self {
            pool,
            auth,
            password_min_length,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        self.auth.codec()
    }
}
