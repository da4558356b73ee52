//! Handlers for the HTML admin panel at `/admin`.
//!
//! The panel offers generic CRUD over the `home_video` table through the
//! same repository and validation rules as the JSON API. Edits are full
//! overwrites: blank `year` or `director` fields store NULL.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use homevideo_core::error::CoreError;
use homevideo_core::home_video::ENTITY;
use homevideo_core::messages;
use homevideo_core::types::DbId;
use homevideo_db::models::home_video::{CreateHomeVideo, HomeVideo};
use homevideo_db::repositories::HomeVideoRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiForm, ApiPath};
use crate::state::AppState;
use crate::views;

/// Raw form fields as submitted by the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminVideoForm {
    pub name: String,
    pub category: String,
    pub year: String,
    pub director: String,
}

impl AdminVideoForm {
    /// Convert submitted text into a validated record.
    pub fn to_input(&self) -> Result<CreateHomeVideo, CoreError> {
        let year = match self.year.trim() {
            "" => None,
            raw => Some(raw.parse::<i32>().map_err(|_| {
                CoreError::Validation(format!("Field 'year' must be an integer, got '{raw}'"))
            })?),
        };
        let director = match self.director.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        let input = CreateHomeVideo {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            year,
            director,
        };
        input.validate()?;
        Ok(input)
    }
}

impl From<&HomeVideo> for AdminVideoForm {
    fn from(video: &HomeVideo) -> Self {
        Self {
            name: video.name.clone(),
            category: video.category.clone(),
            year: video.year.map(|y| y.to_string()).unwrap_or_default(),
            director: video.director.clone().unwrap_or_default(),
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Re-render a form with a 400 status and the validation message.
fn rejected_form(
    state: &AppState,
    title: &str,
    action: &str,
    form: &AdminVideoForm,
    err: &CoreError,
) -> AppResult<Response> {
    let message = match err {
        CoreError::Validation(detail) => format!("{}: {detail}", messages::INVALID_REQUEST),
        _ => messages::INVALID_REQUEST.to_string(),
    };
    let page = views::form_page(&state.templates, title, action, form, Some(&message))?;
    Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
}

/// GET /admin
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let count = HomeVideoRepo::count(&state.pool).await?;
    Ok(Html(views::index_page(&state.templates, count)?))
}

/// GET /admin/homevideo
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let videos = HomeVideoRepo::list(&state.pool).await?;
    Ok(Html(views::list_page(&state.templates, &videos)?))
}

/// GET /admin/homevideo/new
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = views::form_page(
        &state.templates,
        "Create HomeVideo",
        views::ADMIN_NEW_PATH,
        &AdminVideoForm::default(),
        None,
    )?;
    Ok(Html(page))
}

/// POST /admin/homevideo/new
pub async fn create(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<AdminVideoForm>,
) -> AppResult<Response> {
    let input = match form.to_input() {
        Ok(input) => input,
        Err(err) => {
            return rejected_form(&state, "Create HomeVideo", views::ADMIN_NEW_PATH, &form, &err)
        }
    };

    let video = HomeVideoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = video.id, "Home video created via admin panel");
    Ok(Redirect::to(views::ADMIN_LIST_PATH).into_response())
}

/// GET /admin/homevideo/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Html<String>> {
    let video = HomeVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let page = views::form_page(
        &state.templates,
        "Edit HomeVideo",
        &views::edit_path(id),
        &AdminVideoForm::from(&video),
        None,
    )?;
    Ok(Html(page))
}

/// POST /admin/homevideo/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiForm(form): ApiForm<AdminVideoForm>,
) -> AppResult<Response> {
    if HomeVideoRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let input = match form.to_input() {
        Ok(input) => input,
        Err(err) => {
            return rejected_form(&state, "Edit HomeVideo", &views::edit_path(id), &form, &err)
        }
    };

    HomeVideoRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Home video replaced via admin panel");
    Ok(Redirect::to(views::ADMIN_LIST_PATH).into_response())
}

/// POST /admin/homevideo/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Redirect> {
    if !HomeVideoRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Home video deleted via admin panel");
    Ok(Redirect::to(views::ADMIN_LIST_PATH))
}
