pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{
        admin::{dashboard, list_users, update_user_role, update_user_status},
        dashboard_response::DashboardResponse,
        update_role_request::UpdateRoleRequest,
        update_status_request::UpdateStatusRequest,
        user_list_response::UserListResponse,
        user_response::UserResponse,
    },
    areas::{
        area_response::AreaResponse,
        areas::{employee_data, my_tasks, team_overview},
    },
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        user_compact_dto::UserCompactDto,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::Identity,
    me::{me::me, me_response::MeResponse},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
