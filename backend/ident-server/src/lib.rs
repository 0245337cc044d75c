pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::auth::login,
    error::ApiError,
    error::Result as ApiResult,
    extractors::authorization::AuthorizationHeader,
    users::users::{delete_user, get_user, list_users, register_user, update_user, validate_token},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
