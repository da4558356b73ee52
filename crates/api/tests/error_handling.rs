//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values, without a
//! router or database.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use homevideo_api::error::AppError;
use homevideo_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_video_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "HomeVideo",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"error": "Видео не найдено"}));
}

#[tokio::test]
async fn validation_error_returns_400_without_detail() {
    let err = AppError::Core(CoreError::Validation("Field 'name' must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"error": "Некорректный запрос"}));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("EOF while parsing".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Некорректный запрос");
}

#[tokio::test]
async fn route_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::RouteNotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Ресурс не найден");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database path leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Внутренняя ошибка сервера");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pool_errors_map_to_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Внутренняя ошибка сервера");
}

#[test]
fn core_error_converts_via_from() {
    let err: AppError = CoreError::Internal("boom".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Internal(_)));
}

#[tokio::test]
async fn template_error_maps_to_500_without_detail() {
    let err: AppError = tera::Error::msg("Variable `form.name` not found").into();
    assert_matches!(err, AppError::Template(_));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"error": "Внутренняя ошибка сервера"}));
}
