use crate::{
    ApiError, AppState, dashboard, employee_data, health, list_users, login, me, my_tasks,
    register, team_overview, update_user_role, update_user_status,
};
use crate::middleware::{authenticate::authenticate, authorize::require_roles};

use hr_auth::RoleAllowList;
use hr_core::RoleName;

use std::sync::Arc;

use axum::{
    Router,
    http::Uri,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

pub const ADMIN_ROLES: &[RoleName] = &[RoleName::Admin, RoleName::GodAdmin];
pub const HR_ROLES: &[RoleName] = &[RoleName::Hr, RoleName::Admin, RoleName::GodAdmin];
pub const MANAGER_ROLES: &[RoleName] = &[
    RoleName::Manager,
    RoleName::Hr,
    RoleName::Admin,
    RoleName::GodAdmin,
];
pub const STAFF_ROLES: &[RoleName] = &[
    RoleName::Staff,
    RoleName::Manager,
    RoleName::Hr,
    RoleName::Admin,
    RoleName::GodAdmin,
];

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/users", get(list_users))
        .route("/users/{id}/role", put(update_user_role))
        .route("/users/{id}/status", put(update_user_status))
        .route_layer(from_fn_with_state(allow(ADMIN_ROLES), require_roles));

    let hr = Router::new()
        .route("/employee-data", get(employee_data))
        .route_layer(from_fn_with_state(allow(HR_ROLES), require_roles));

    let manager = Router::new()
        .route("/team-overview", get(team_overview))
        .route_layer(from_fn_with_state(allow(MANAGER_ROLES), require_roles));

    let staff = Router::new()
        .route("/my-tasks", get(my_tasks))
        .route_layer(from_fn_with_state(allow(STAFF_ROLES), require_roles));

    // Authentication wraps every group; each group adds its own allow-list
    let protected = Router::new()
        .route("/me", get(me))
        .nest("/admin", admin)
        .nest("/hr", hr)
        .nest("/manager", manager)
        .nest("/staff-area", staff)
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    let api = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected);

    Router::new()
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .nest("/api/v1", api)
        .fallback(not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn allow(roles: &[RoleName]) -> Arc<RoleAllowList> {
    Arc::new(RoleAllowList::of(roles))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
