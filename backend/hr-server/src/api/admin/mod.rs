pub mod admin;
pub mod dashboard_response;
pub mod update_role_request;
pub mod update_status_request;
pub mod user_list_response;
pub mod user_response;
