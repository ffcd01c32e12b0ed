mod role_name;
mod user;
