#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{new_user, seed_role};
pub use test_db::create_test_pool;
