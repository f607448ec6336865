//! Root greeting and health check.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

pub async fn root() -> &'static str {
    "Hello World!"
}

/// Liveness probe with the current collection size.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let videos = state.videos.count().await;
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "healthy", "videos": videos })),
    )
}
