#![allow(dead_code)]

//! Test infrastructure for hr-server API tests

use hr_auth::{AuthService, LoginRateLimiter, PasswordHasher, TokenCodec};
use hr_core::{NewUser, RoleName, User};
use hr_db::{RoleRepository, Seeder, SqliteCredentialStore, UserRepository};
use hr_server::{AppState, build_router};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-at-least-32";
pub const PASSWORD: &str = "secret1";

pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(64, 1, 1).expect("valid test hasher params")
}

/// In-memory store with every role seeded
pub async fn create_test_pool() -> SqlitePool {
    let pool = hr_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    Seeder::new(pool.clone())
        .seed_roles()
        .await
        .expect("Failed to seed roles");
    pool
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(create_test_pool().await, None)
}

pub fn create_test_app_state_with(
    pool: SqlitePool,
    limiter: Option<Arc<LoginRateLimiter>>,
) -> AppState {
    let store = Arc::new(SqliteCredentialStore::new(pool.clone()));
    let codec = Arc::new(TokenCodec::with_hs256(TEST_SECRET));
    let mut auth = AuthService::new(store, fast_hasher(), codec, RoleName::Staff.as_str());
    if let Some(limiter) = limiter {
        auth = auth.with_rate_limiter(limiter);
    }

    AppState::new(pool, Arc::new(auth), 6)
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Insert an active user holding `role` with password [`PASSWORD`]
pub async fn create_user_with_role(state: &AppState, username: &str, role: RoleName) -> User {
    let role = RoleRepository::new(state.pool.clone())
        .find_by_name(role.as_str())
        .await
        .expect("role lookup")
        .expect("role seeded");
    let hash = fast_hasher().hash(PASSWORD).expect("hash");

    UserRepository::new(state.pool.clone())
        .create(&NewUser::active(
            username,
            &format!("{username}@x.com"),
            hash,
            role.id,
        ))
        .await
        .expect("Failed to create test user")
}

pub fn token_for(state: &AppState, user: &User) -> String {
    let codec = state.codec();
    codec.issue(&codec.claims_for(user)).expect("token")
}

/// Send one request and decode the JSON body (Null when the body is not JSON)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn register(app: &Router, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({ "username": username, "email": email, "password": password })),
    )
    .await
}

pub async fn login(app: &Router, identifier: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "identifier": identifier, "password": password })),
    )
    .await
}

/// Login as if the connection came from `client`
pub async fn login_from(
    app: &Router,
    client: SocketAddr,
    identifier: &str,
    password: &str,
) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .extension(ConnectInfo(client))
        .body(Body::from(
            json!({ "identifier": identifier, "password": password }).to_string(),
        ))
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

pub fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}
