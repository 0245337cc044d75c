use crate::AppState;

use axum::{Json, extract::State};
use serde_json::{Value, json};

/// GET / - liveness probe
pub async fn check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.service.check() }))
}
