//! Route definitions for the HTML admin panel.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /                          -> index
/// GET    /homevideo                 -> list
/// GET    /homevideo/new             -> new_form
/// POST   /homevideo/new             -> create
/// GET    /homevideo/{id}/edit       -> edit_form
/// POST   /homevideo/{id}/edit       -> update
/// POST   /homevideo/{id}/delete     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/homevideo", get(admin::list))
        .route("/homevideo/new", get(admin::new_form).post(admin::create))
        .route(
            "/homevideo/{id}/edit",
            get(admin::edit_form).post(admin::update),
        )
        .route("/homevideo/{id}/delete", post(admin::delete))
}
