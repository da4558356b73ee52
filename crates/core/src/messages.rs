//! User-facing response messages.
//!
//! Clients match on these strings, so they are part of the HTTP contract
//! and must not change.

/// Body of every 400 response.
pub const INVALID_REQUEST: &str = "Некорректный запрос";

/// Body of a 404 for a missing home video.
pub const VIDEO_NOT_FOUND: &str = "Видео не найдено";

/// Body of a 404 for an unknown route or an unparseable path parameter.
pub const RESOURCE_NOT_FOUND: &str = "Ресурс не найден";

/// Body of every 500 response.
pub const INTERNAL_ERROR: &str = "Внутренняя ошибка сервера";

/// Successful update acknowledgement.
pub const VIDEO_UPDATED: &str = "Видеотека обновлена";

/// Successful delete acknowledgement.
pub const VIDEO_DELETED: &str = "Видео удалено";

/// Resolve the 404 message for a missing entity of the given kind.
pub fn not_found(entity: &str) -> &'static str {
    match entity {
        crate::home_video::ENTITY => VIDEO_NOT_FOUND,
        _ => RESOURCE_NOT_FOUND,
    }
}
