//! Account administration: listing, role changes and soft deactivation.
//!
//! Changes apply to the store immediately but not to tokens already issued,
//! which keep their embedded role until they expire.

use crate::{
    ApiError, ApiResult, AppState, DashboardResponse, Identity, UpdateRoleRequest,
    UpdateStatusRequest, UserDto, UserListResponse, UserResponse,
};

use hr_db::{RoleRepository, UserRepository};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// GET /api/v1/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> ApiResult<Json<DashboardResponse>> {
    let users = UserRepository::new(state.pool.clone()).find_all().await?;

    let mut users_by_role = BTreeMap::new();
    for user in &users {
        *users_by_role.entry(user.role_name.clone()).or_insert(0) += 1;
    }

    Ok(Json(DashboardResponse {
        viewer: identity.username,
        total_users: users.len(),
        active_users: users.iter().filter(|u| u.is_active).count(),
        users_by_role,
    }))
}

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = UserRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// PUT /api/v1/admin/users/{id}/role
pub async fn update_user_role(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRoleRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(request) = payload?;
    let user_id = Uuid::parse_str(&id)?;
    let role_id = Uuid::parse_str(request.role_id.trim())
        .map_err(|_| ApiError::validation("role_id", "role_id must be a valid UUID"))?;

    let role = RoleRepository::new(state.pool.clone())
        .find_by_id(role_id)
        .await?
        .ok_or_else(|| ApiError::validation("role_id", format!("Role {} not found", role_id)))?;

    let users = UserRepository::new(state.pool.clone());
    users.update_role(user_id, role.id).await?;
    let user = reload(&users, user_id).await?;

    log::info!(
        "{} changed role of user {} to '{}'",
        identity.username,
        user.id,
        role.name
    );

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/admin/users/{id}/status
///
/// Soft (de)activation; accounts are never deleted
pub async fn update_user_status(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(request) = payload?;
    let user_id = Uuid::parse_str(&id)?;

    if user_id == identity.user_id && !request.is_active {
        return Err(ApiError::validation(
            "is_active",
            "You cannot deactivate your own account",
        ));
    }

    let users = UserRepository::new(state.pool.clone());
    users.set_active(user_id, request.is_active).await?;
    let user = reload(&users, user_id).await?;

    log::info!(
        "{} set user {} active={}",
        identity.username,
        user.id,
        user.is_active
    );

    Ok(Json(UserResponse { user: user.into() }))
}

async fn reload(users: &UserRepository, id: Uuid) -> ApiResult<hr_core::User> {
    users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))
}
