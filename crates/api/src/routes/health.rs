use axum::extract::State;
use axum::{routing::get, Json, Router};
use homevideo_db::repositories::HomeVideoRepo;
use serde::Serialize;

use crate::state::AppState;

/// `GET /health` payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the catalog table is readable, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored home videos; `null` when the database is unreachable.
    pub home_videos: Option<i64>,
}

/// Counting rows doubles as the readiness check: it needs a live
/// connection and a migrated `home_video` table.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let home_videos = match HomeVideoRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog health check failed");
            None
        }
    };
    let db_healthy = home_videos.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        home_videos,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
