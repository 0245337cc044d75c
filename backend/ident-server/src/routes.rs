use crate::{
    AppState, delete_user, get_user, health, list_users, login, register_user, update_user,
    validate_token,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::check))
        // Users
        .route(
            "/api/v1/users",
            get(list_users)
                .post(register_user)
                .put(update_user)
                .delete(delete_user),
        )
        // Static segment wins over the `{id}` capture
        .route("/api/v1/users/token", get(validate_token))
        .route("/api/v1/users/{id}", get(get_user))
        // Auth
        .route("/api/v1/auth/login", post(login))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
