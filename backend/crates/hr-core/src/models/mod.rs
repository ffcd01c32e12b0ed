pub mod new_user;
pub mod role;
pub mod role_name;
pub mod user;
