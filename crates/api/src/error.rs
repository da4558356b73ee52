use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homevideo_core::error::CoreError;
use homevideo_core::messages;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a `{"error": <message>}` body.
/// The message is one of the fixed strings in [`messages`]; diagnostic
/// detail only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `homevideo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An admin panel template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// A missing, unparseable or ill-typed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched, or a path parameter did not parse.
    #[error("Route not found")]
    RouteNotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, messages::not_found(entity))
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(error = %msg, "Validation failed");
                    (StatusCode::BAD_REQUEST, messages::INVALID_REQUEST)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request body");
                (StatusCode::BAD_REQUEST, messages::INVALID_REQUEST)
            }
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, messages::RESOURCE_NOT_FOUND),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                tracing::debug!(error = %err.body_text(), "Unparseable path parameter");
                AppError::RouteNotFound
            }
            other => AppError::InternalError(other.body_text()),
        }
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - SQLite `CHECK` / `NOT NULL` violations map to 400; they only fire
///   when input slipped past application validation.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, messages::RESOURCE_NOT_FOUND),
        sqlx::Error::Database(db_err)
            if matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::CheckViolation | sqlx::error::ErrorKind::NotNullViolation
            ) =>
        {
            tracing::warn!(error = %db_err, "Constraint violation");
            (StatusCode::BAD_REQUEST, messages::INVALID_REQUEST)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
        }
    }
}
