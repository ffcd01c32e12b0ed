use crate::bootstrap;
use crate::error::ServerError;

use hr_config::Config;
use hr_core::RoleName;
use hr_db::{RoleRepository, UserRepository};

use googletest::prelude::*;

fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some("bootstrap-test-secret-at-least-32-b".to_string());
    config.password.memory_kib = 64;
    config.password.iterations = 1;
    config.password.parallelism = 1;
    config
}

#[test]
fn given_configured_algorithm_when_building_codec_then_applied() {
    let mut config = test_config();
    config.auth.jwt_algorithm = "hs512".to_string();
    config.auth.token_ttl_hours = 2;

    let codec = bootstrap::token_codec(&config).unwrap();

    assert_that!(codec.algorithm().as_str(), eq("HS512"));
    assert_that!(codec.ttl_secs(), eq(7200));
}

#[test]
fn given_missing_secret_when_building_codec_then_config_error() {
    let mut config = test_config();
    config.auth.jwt_secret = None;

    let result = bootstrap::token_codec(&config);

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn given_unsupported_algorithm_when_building_codec_then_auth_error() {
    let mut config = test_config();
    config.auth.jwt_algorithm = "RS256".to_string();

    let result = bootstrap::token_codec(&config);

    assert!(matches!(result, Err(ServerError::Auth(_))));
}

#[test]
fn given_rate_limit_disabled_when_building_limiter_then_none() {
    let mut config = test_config();
    config.rate_limit.login_enabled = false;

    assert!(bootstrap::login_rate_limiter(&config).is_none());
    assert!(bootstrap::login_rate_limiter(&test_config()).is_some());
}

#[tokio::test]
async fn given_god_admin_credentials_when_seeding_then_roles_and_account_created() {
    // Given
    let pool = hr_db::connect_in_memory().await.unwrap();
    let mut config = test_config();
    config.seed.god_admin_email = Some("root@x.com".to_string());
    config.seed.god_admin_password = Some("break-glass-1".to_string());
    let hasher = bootstrap::password_hasher(&config).unwrap();

    // When
    bootstrap::seed(&config, &pool, &hasher).await.unwrap();

    // Then
    let roles = RoleRepository::new(pool.clone()).find_all().await.unwrap();
    assert_that!(roles, len(eq(RoleName::ALL.len())));
    let admin = UserRepository::new(pool)
        .find_by_identifier("root@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_that!(admin.username, eq("godadmin"));
    assert_that!(admin.role_name, eq("god-admin"));
    assert!(hasher.verify(&admin.password_hash, "break-glass-1"));
}

#[tokio::test]
async fn given_seeded_god_admin_when_logging_in_through_service_then_token_issued() {
    let pool = hr_db::connect_in_memory().await.unwrap();
    let mut config = test_config();
    config.seed.god_admin_email = Some("root@x.com".to_string());
    config.seed.god_admin_password = Some("break-glass-1".to_string());
    let hasher = bootstrap::password_hasher(&config).unwrap();
    bootstrap::seed(&config, &pool, &hasher).await.unwrap();
    let service = bootstrap::auth_service(&config, pool, hasher, None).unwrap();

    let outcome = service
        .login(hr_auth::LoginCommand {
            identifier: "godadmin".to_string(),
            password: "break-glass-1".to_string(),
            client: None,
        })
        .await
        .unwrap();

    let claims = service.codec().parse(&outcome.access_token).unwrap();
    assert_that!(claims.role, eq("god-admin"));
}

#[tokio::test]
async fn given_seeding_disabled_when_seeding_then_store_untouched() {
    let pool = hr_db::connect_in_memory().await.unwrap();
    let mut config = test_config();
    config.seed.enabled = false;
    let hasher = bootstrap::password_hasher(&config).unwrap();

    bootstrap::seed(&config, &pool, &hasher).await.unwrap();

    assert_that!(RoleRepository::new(pool).find_all().await.unwrap(), len(eq(0)));
}
