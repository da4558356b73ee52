//! Home video entity model and DTOs.

use homevideo_core::error::CoreError;
use homevideo_core::home_video::{validate_new, validate_patch};
use homevideo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `home_video` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct HomeVideo {
    #[schema(example = 1)]
    pub id: DbId,
    /// Название видео
    #[schema(example = "Matrix")]
    pub name: String,
    /// Категория видео
    #[schema(example = "SciFi")]
    pub category: String,
    /// Год выпуска
    #[schema(example = 1999)]
    pub year: Option<i32>,
    /// Режисёр видео
    #[schema(example = "Wachowski")]
    pub director: Option<String>,
}

/// DTO for creating a new home video.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateHomeVideo {
    /// Название видео
    pub name: String,
    /// Категория видео
    pub category: String,
    /// Год выпуска
    pub year: Option<i32>,
    /// Режисёр видео
    pub director: Option<String>,
}

impl CreateHomeVideo {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_new(&self.name, &self.category, self.director.as_deref())
    }
}

/// DTO for a partial update. All fields are optional; `None` leaves the
/// stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateHomeVideo {
    /// Название видео
    pub name: Option<String>,
    /// Категория видео
    pub category: Option<String>,
    /// Год выпуска
    pub year: Option<i32>,
    /// Режисёр видео
    pub director: Option<String>,
}

impl UpdateHomeVideo {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_patch(
            self.name.as_deref(),
            self.category.as_deref(),
            self.director.as_deref(),
        )
    }

    /// Whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.year.is_none()
            && self.director.is_none()
    }
}
