use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use vidkeep_core::models::{CreateVideoInput, UpdateVideoInput, VideoResponse};
use vidkeep_core::validation::{validate_create, validate_update, ValidationErrors};
use vidkeep_core::AppError;

fn video_not_found() -> AppError {
    AppError::NotFound("Video not found".to_string())
}

/// Path ids travel as text; anything that is not an integer cannot name a stored video.
fn parse_video_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| video_not_found())
}

#[utoipa::path(
    get,
    path = "/videos",
    tag = "videos",
    responses(
        (status = 200, description = "List of videos", body = Vec<VideoResponse>)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_videos"))]
pub async fn list_videos(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let videos: Vec<VideoResponse> = state
        .videos
        .list()
        .await
        .iter()
        .map(VideoResponse::from)
        .collect();

    Json(videos)
}

#[utoipa::path(
    post,
    path = "/videos",
    tag = "videos",
    request_body = CreateVideoInput,
    responses(
        (status = 201, description = "Video created", body = VideoResponse),
        (status = 400, description = "Validation failed", body = ValidationErrors)
    )
)]
#[tracing::instrument(skip(state, body), fields(operation = "create_video"))]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<Value>,
) -> Result<impl IntoResponse, HttpAppError> {
    let input = validate_create(&body).map_err(AppError::Validation)?;

    let video = state.videos.create(input).await;
    tracing::info!(video_id = video.id, "Video created");

    Ok((StatusCode::CREATED, Json(VideoResponse::from(&video))))
}

#[utoipa::path(
    get,
    path = "/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found")
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "get_video"))]
pub async fn get_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_video_id(&id)?;

    let video = state.videos.find_by_id(id).await;
    let response = VideoResponse::project(video.as_ref()).ok_or_else(video_not_found)?;

    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    request_body = UpdateVideoInput,
    responses(
        (status = 204, description = "Video updated"),
        (status = 400, description = "Validation failed", body = ValidationErrors),
        (status = 404, description = "Video not found")
    )
)]
#[tracing::instrument(skip(state, body), fields(video_id = %id, operation = "update_video"))]
pub async fn update_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<Value>,
) -> Result<StatusCode, HttpAppError> {
    // Validation runs before the lookup: a bad body is a 400 even for unknown ids.
    let input = validate_update(&body).map_err(AppError::Validation)?;
    let id = parse_video_id(&id)?;

    if !state.videos.update_by_id(id, input).await {
        return Err(video_not_found().into());
    }

    tracing::info!(video_id = id, "Video updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/videos/{id}",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 404, description = "Video not found")
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "delete_video"))]
pub async fn delete_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, HttpAppError> {
    let id = parse_video_id(&id)?;

    if state.videos.remove_by_id(id).await == 0 {
        return Err(video_not_found().into());
    }

    tracing::info!(video_id = id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id() {
        assert_eq!(parse_video_id("1700000000000").unwrap(), 1_700_000_000_000);
        assert_eq!(parse_video_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_video_id_non_numeric_is_not_found() {
        assert!(matches!(parse_video_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_video_id("1.5"), Err(AppError::NotFound(_))));
    }
}
