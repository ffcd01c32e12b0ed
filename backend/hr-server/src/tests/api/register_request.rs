use crate::{ApiError, LoginRequest, RegisterRequest};

use googletest::prelude::*;
use uuid::Uuid;

fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role_id: None,
    }
}

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_padded_identity_when_converted_then_trimmed() {
    let command = request("  alice ", " alice@x.com", "secret1")
        .into_command(6)
        .unwrap();

    assert_that!(command.username, eq("alice"));
    assert_that!(command.email, eq("alice@x.com"));
    assert_that!(command.role_id, none());
}

#[test]
fn given_password_with_spaces_when_converted_then_kept_verbatim() {
    let command = request("alice", "alice@x.com", " secret1 ")
        .into_command(6)
        .unwrap();

    assert_that!(command.password, eq(" secret1 "));
}

#[test]
fn given_whitespace_username_when_converted_then_username_field_error() {
    let error = request(" \t", "alice@x.com", "secret1")
        .into_command(6)
        .unwrap_err();

    assert_that!(field_of(error), some(eq("username")));
}

#[test]
fn given_password_below_minimum_when_converted_then_password_field_error() {
    let error = request("alice", "alice@x.com", "abcde")
        .into_command(6)
        .unwrap_err();

    assert_that!(field_of(error), some(eq("password")));
}

#[test]
fn given_multibyte_password_when_converted_then_length_counts_characters() {
    assert!(request("alice", "alice@x.com", "ééééé").into_command(6).is_err());
    assert!(request("alice", "alice@x.com", "éééééé").into_command(6).is_ok());
}

#[test]
fn given_role_id_when_converted_then_parsed() {
    let role_id = Uuid::new_v4();
    let mut req = request("alice", "alice@x.com", "secret1");
    req.role_id = Some(role_id.to_string());

    let command = req.into_command(6).unwrap();

    assert_that!(command.role_id, some(eq(role_id)));
}

#[test]
fn given_invalid_role_id_when_converted_then_role_id_field_error() {
    let mut req = request("alice", "alice@x.com", "secret1");
    req.role_id = Some("staff".to_string());

    let error = req.into_command(6).unwrap_err();

    assert_that!(field_of(error), some(eq("role_id")));
}

#[test]
fn given_blank_identifier_when_login_converted_then_identifier_field_error() {
    let error = LoginRequest {
        identifier: "   ".to_string(),
        password: "secret1".to_string(),
    }
    .into_command(6)
    .unwrap_err();

    assert_that!(field_of(error), some(eq("identifier")));
}
