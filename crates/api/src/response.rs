//! Response payload types for the HomeVideo resource.
//!
//! These are serialized directly (no `{ "data": ... }` envelope) because
//! clients of the catalog expect bare `{id}`, `{message}` and `{error}`
//! objects.

use homevideo_core::types::DbId;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful create.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: DbId,
}

/// Acknowledgement body of a successful update or delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Видеотека обновлена")]
    pub message: String,
}

/// Error envelope produced by [`crate::error::AppError`].
///
/// Only used to describe the error body in the OpenAPI document.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Видео не найдено")]
    pub error: String,
}
