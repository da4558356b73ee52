pub mod admin;
pub mod docs;
pub mod health;
pub mod home_video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /HomeVideo                                       list, create
/// /HomeVideo/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/HomeVideo", home_video::router())
}
