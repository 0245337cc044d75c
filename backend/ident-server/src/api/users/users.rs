//! User REST API handlers

use crate::{ApiResult, AppState, AuthorizationHeader};

use ident_core::{PublicUserView, RegisterUser, SessionStatus, UserMessage, UserUpdate};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/users
///
/// List every user as its public projection
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<PublicUserView>>> {
    let users = state.service.list().await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PublicUserView>> {
    let user = state.service.get(&id).await?;
    Ok(Json(user))
}

/// POST /api/v1/users
///
/// Register a new user
pub async fn register_user(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> ApiResult<Json<UserMessage>> {
    let created = state.service.register(input).await?;
    Ok(Json(created))
}

/// PUT /api/v1/users
///
/// Update the user identified by the bearer token
pub async fn update_user(
    State(state): State<AppState>,
    authorization: AuthorizationHeader,
    Json(input): Json<UserUpdate>,
) -> ApiResult<Json<UserMessage>> {
    let updated = state
        .service
        .update_self(authorization.as_deref(), input)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/users
///
/// Delete the user identified by the bearer token
pub async fn delete_user(
    State(state): State<AppState>,
    authorization: AuthorizationHeader,
) -> ApiResult<Json<UserMessage>> {
    let deleted = state.service.delete_self(authorization.as_deref()).await?;
    Ok(Json(deleted))
}

/// GET /api/v1/users/token
///
/// Confirm the bearer token still names a live user and return a fresh one
pub async fn validate_token(
    State(state): State<AppState>,
    authorization: AuthorizationHeader,
) -> ApiResult<Json<SessionStatus>> {
    let status = state
        .service
        .validate_session(authorization.as_deref())
        .await?;
    Ok(Json(status))
}
