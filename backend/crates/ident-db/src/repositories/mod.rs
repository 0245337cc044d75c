pub mod sqlite_user_repository;
pub mod user_repository;

mod user_row;
