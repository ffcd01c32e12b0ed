use sqlx::SqlitePool;

/// In-memory SQLite pool with foreign keys on and migrations applied
pub async fn create_test_pool() -> SqlitePool {
    hr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}
