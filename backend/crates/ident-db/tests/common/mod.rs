#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::new_user;
pub use test_db::create_test_pool;
