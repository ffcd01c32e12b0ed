use crate::ApiError;

use hr_auth::{AuthError, TokenError};
use hr_core::CoreError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("username", "username is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_not_found_omits_field() {
    let (status, json) = body_json(ApiError::not_found("No route for /x")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_duplicate_identity_maps_to_409() {
    let error = ApiError::from(AuthError::DuplicateIdentity {
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_credential_failures_map_to_401_with_distinct_codes() {
    let (invalid_status, invalid) = body_json(AuthError::invalid_credentials().into()).await;
    let (inactive_status, inactive) = body_json(
        AuthError::AccountInactive {
            location: location(),
        }
        .into(),
    )
    .await;

    assert_eq!(invalid_status, StatusCode::UNAUTHORIZED);
    assert_eq!(inactive_status, StatusCode::UNAUTHORIZED);
    assert_eq!(invalid["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(inactive["error"]["code"], "ACCOUNT_INACTIVE");
}

#[tokio::test]
async fn test_token_errors_collapse_to_reason_message() {
    let error: ApiError = AuthError::from(TokenError::Expired { exp: 1 }).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "Token has expired");
}

#[tokio::test]
async fn test_forbidden_maps_to_403() {
    let (status, json) = body_json(AuthError::forbidden("nope").into()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_rate_limited_sets_retry_after() {
    let error: ApiError = AuthError::RateLimited {
        retry_after_secs: 17,
        location: location(),
    }
    .into();

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_that!(
        response.headers().get("retry-after").and_then(|v| v.to_str().ok()),
        some(eq("17"))
    );
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let source = std::io::Error::other("disk on fire at /var/lib/hr.db");
    let error: ApiError = AuthError::from(CoreError::store("lookup failed", source)).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_that!(
        json["error"]["message"].as_str().unwrap(),
        not(contains_substring("disk"))
    );
}

#[tokio::test]
async fn test_default_role_missing_is_server_error() {
    let error: ApiError = AuthError::DefaultRoleMissing {
        role: "staff".to_string(),
        location: location(),
    }
    .into();

    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let error: ApiError = uuid::Uuid::parse_str("nope").unwrap_err().into();

    assert!(matches!(error, ApiError::Validation { .. }));
}
