//! Role-gated area endpoints. Access is decided entirely by the route group's
//! allow-list; the handlers only report who got in.

use crate::{AreaResponse, Identity};

use axum::Json;

/// GET /api/v1/hr/employee-data
pub async fn employee_data(Identity(identity): Identity) -> Json<AreaResponse> {
    Json(AreaResponse::new(
        "hr",
        "Employee data is available to HR staff",
        identity,
    ))
}

/// GET /api/v1/manager/team-overview
pub async fn team_overview(Identity(identity): Identity) -> Json<AreaResponse> {
    Json(AreaResponse::new(
        "manager",
        "Team overview is available to managers",
        identity,
    ))
}

/// GET /api/v1/staff-area/my-tasks
pub async fn my_tasks(Identity(identity): Identity) -> Json<AreaResponse> {
    Json(AreaResponse::new(
        "staff",
        "Your assigned tasks",
        identity,
    ))
}
