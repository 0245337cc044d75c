use crate::{ApiResult, AppState};

use ident_core::{LoginMessage, LoginRequest};

use axum::{Json, extract::State};

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginMessage>> {
    let login = state.service.login(request).await?;
    Ok(Json(login))
}
