mod common;

use common::{create_test_pool, new_user, seed_role};

use hr_core::{CoreError, CredentialStore, RoleName};
use hr_db::SqliteCredentialStore;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_duplicate_email_when_creating_through_store_then_conflict() {
    // Given
    let pool = create_test_pool().await;
    let staff = seed_role(&pool, RoleName::Staff).await;
    let store = SqliteCredentialStore::new(pool);
    store
        .create_user(&new_user("alice", "alice@x.com", staff.id))
        .await
        .unwrap();

    // When
    let result = store
        .create_user(&new_user("alice2", "Alice@X.com", staff.id))
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::Conflict { .. })));
}

#[tokio::test]
async fn given_unknown_user_when_recording_login_then_store_error() {
    let pool = create_test_pool().await;
    let store = SqliteCredentialStore::new(pool);

    let result = store.record_login(Uuid::new_v4(), Utc::now()).await;

    assert!(matches!(result, Err(CoreError::Store { .. })));
}

#[tokio::test]
async fn given_user_when_looked_up_through_store_then_role_and_login_visible() {
    // Given
    let pool = create_test_pool().await;
    let staff = seed_role(&pool, RoleName::Staff).await;
    let store = SqliteCredentialStore::new(pool);
    let user = store
        .create_user(&new_user("alice", "alice@x.com", staff.id))
        .await
        .unwrap();
    let at = Utc.with_ymd_and_hms(2026, 5, 2, 8, 0, 0).unwrap();

    // When
    store.record_login(user.id, at).await.unwrap();

    // Then
    let found = store.find_user_by_identifier("alice").await.unwrap().unwrap();
    assert_that!(found.last_login, some(eq(at)));
    let role = store.find_role_by_name("staff").await.unwrap().unwrap();
    assert_that!(role.id, eq(staff.id));
    assert!(store.identity_exists("ALICE", "nobody@x.com").await.unwrap());
    assert_that!(store.find_role_by_id(Uuid::new_v4()).await.unwrap(), none());
}
