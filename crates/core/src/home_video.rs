//! Home video domain rules.
//!
//! The `home_video` table stores free-text columns up to
//! [`MAX_TEXT_LEN`] characters. `name` and `category` are mandatory on
//! every write that touches them; `year` and `director` are nullable.

use crate::error::CoreError;

/// Entity name used in [`CoreError::NotFound`].
pub const ENTITY: &str = "HomeVideo";

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length (in characters) of `name`, `category` and `director`.
pub const MAX_TEXT_LEN: usize = 120;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a mandatory text column: non-blank and within length limit.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must not be empty"
        )));
    }
    validate_text_len(field, value)
}

/// Validate a nullable text column. `None` is always accepted.
pub fn validate_optional_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_text_len(field, v),
        None => Ok(()),
    }
}

fn validate_text_len(field: &str, value: &str) -> Result<(), CoreError> {
    // Counted in chars to match SQLite's length(), not UTF-8 bytes.
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "Field '{field}' too long: {len} chars (max {MAX_TEXT_LEN})"
        )));
    }
    Ok(())
}

/// Validate the fields of a new home video.
pub fn validate_new(name: &str, category: &str, director: Option<&str>) -> Result<(), CoreError> {
    validate_required_text("name", name)?;
    validate_required_text("category", category)?;
    validate_optional_text("director", director)
}

/// Validate the fields carried by a partial update.
///
/// Only fields that are present are checked; a present `name` or
/// `category` must still be non-blank.
pub fn validate_patch(
    name: Option<&str>,
    category: Option<&str>,
    director: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_required_text("name", name)?;
    }
    if let Some(category) = category {
        validate_required_text("category", category)?;
    }
    validate_optional_text("director", director)
}
