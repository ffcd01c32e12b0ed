pub mod admin;
pub mod areas;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod me;
