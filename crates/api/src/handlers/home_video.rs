//! Handlers for the `/api/HomeVideo` resource.
//!
//! Every handler takes the pool from [`AppState`], performs at most one
//! repository call that mutates, and answers with a bare JSON object.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use homevideo_core::error::CoreError;
use homevideo_core::home_video::ENTITY;
use homevideo_core::messages;
use homevideo_core::types::DbId;
use homevideo_db::models::home_video::{CreateHomeVideo, HomeVideo, UpdateHomeVideo};
use homevideo_db::repositories::HomeVideoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{CreatedResponse, ErrorResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/HomeVideo
#[utoipa::path(
    post,
    path = "/api/HomeVideo",
    tag = "HomeVideo",
    summary = "Добавление нового видео",
    request_body = CreateHomeVideo,
    responses(
        (status = 201, description = "Видео успешно добавлено", body = CreatedResponse),
        (status = 400, description = "Некорректный запрос", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateHomeVideo>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;
    let video = HomeVideoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = video.id, name = %video.name, "Home video created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: video.id })))
}

/// GET /api/HomeVideo
#[utoipa::path(
    get,
    path = "/api/HomeVideo",
    tag = "HomeVideo",
    summary = "Просмотр всех видео",
    responses(
        (status = 200, description = "Список всех видео", body = [HomeVideo])
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HomeVideo>>> {
    let videos = HomeVideoRepo::list(&state.pool).await?;
    tracing::debug!(count = videos.len(), "Listed home videos");
    Ok(Json(videos))
}

/// GET /api/HomeVideo/{id}
#[utoipa::path(
    get,
    path = "/api/HomeVideo/{id}",
    tag = "HomeVideo",
    summary = "Просмотр видео по номеру ID",
    params(("id" = i64, Path, description = "ID видео")),
    responses(
        (status = 200, description = "Информация о видео", body = HomeVideo),
        (status = 404, description = "Видео не найдено", body = ErrorResponse)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<HomeVideo>> {
    let video = HomeVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(video))
}

/// PUT /api/HomeVideo/{id}
///
/// A missing id is a 404 even when the body is also broken: a rejected
/// body only surfaces after a lookup confirms the record exists.
#[utoipa::path(
    put,
    path = "/api/HomeVideo/{id}",
    tag = "HomeVideo",
    summary = "Обновление информации о видео",
    params(("id" = i64, Path, description = "ID видео")),
    request_body = UpdateHomeVideo,
    responses(
        (status = 200, description = "Видеотека обновлена", body = MessageResponse),
        (status = 400, description = "Некорректный запрос", body = ErrorResponse),
        (status = 404, description = "Видео не найдено", body = ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    body: Result<ApiJson<UpdateHomeVideo>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let body = body.and_then(|ApiJson(input)| {
        input.validate()?;
        Ok(input)
    });
    let input = match body {
        Ok(input) => input,
        Err(err) => {
            if HomeVideoRepo::find_by_id(&state.pool, id).await?.is_none() {
                return Err(not_found(id));
            }
            return Err(err);
        }
    };

    HomeVideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Home video updated");

    Ok(Json(MessageResponse {
        message: messages::VIDEO_UPDATED.to_string(),
    }))
}

/// DELETE /api/HomeVideo/{id}
#[utoipa::path(
    delete,
    path = "/api/HomeVideo/{id}",
    tag = "HomeVideo",
    summary = "Удаление видео по номеру ID",
    params(("id" = i64, Path, description = "ID видео")),
    responses(
        (status = 200, description = "Видео удалено", body = MessageResponse),
        (status = 404, description = "Видео не найдено", body = ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !HomeVideoRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Home video deleted");

    Ok(Json(MessageResponse {
        message: messages::VIDEO_DELETED.to_string(),
    }))
}
