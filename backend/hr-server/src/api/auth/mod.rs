pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod register_request;
pub mod register_response;
pub mod user_compact_dto;
pub mod user_dto;
