use std::sync::Arc;

use tera::Tera;

use crate::views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: homevideo_db::DbPool,
    /// Compiled admin panel templates.
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Build the state around `pool`, compiling the admin templates once.
    pub fn new(pool: homevideo_db::DbPool) -> Result<Self, tera::Error> {
        Ok(Self {
            pool,
            templates: Arc::new(views::load_templates()?),
        })
    }
}
