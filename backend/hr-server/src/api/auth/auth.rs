//! Registration and login handlers

use crate::{
    ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use std::net::SocketAddr;

use axum::{
    Extension, Json,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/auth/register
///
/// Creates an active account. No token is issued.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;
    let command = request.into_command(state.password_min_length)?;

    let user = state.auth.register(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    ))
}

/// POST /api/v1/auth/login
///
/// `identifier` is a username or an email. Attempts are throttled per
/// client address when the listener records one.
pub async fn login(
    State(state): State<AppState>,
    connect_info: Option<Extension<ConnectInfo<SocketAddr>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;
    let mut command = request.into_command(state.password_min_length)?;
    command.client = connect_info.map(|Extension(ConnectInfo(addr))| addr.ip());

    let outcome = state.auth.login(command).await?;

    Ok(Json(LoginResponse {
        user: outcome.user.into(),
        access_token: outcome.access_token,
        token_type: "Bearer",
        expires_in: state.codec().ttl_secs(),
        refresh_token: outcome.refresh_token,
    }))
}
