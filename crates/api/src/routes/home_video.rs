//! Route definitions for the `/HomeVideo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::home_video;
use crate::state::AppState;

/// Routes mounted at `/api/HomeVideo`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_video::list).post(home_video::create))
        .route(
            "/{id}",
            get(home_video::get_by_id)
                .put(home_video::update)
                .delete(home_video::delete),
        )
}
