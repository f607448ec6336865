use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

/// Wipe every stored video. Test-support only; mounted when `ENABLE_TESTING_ROUTES` is on.
#[utoipa::path(
    delete,
    path = "/testing/all-data",
    tag = "testing",
    responses(
        (status = 204, description = "All data removed")
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_all_data"))]
pub async fn delete_all_data(State(state): State<Arc<AppState>>) -> StatusCode {
    state.videos.reset().await;
    StatusCode::NO_CONTENT
}
