//! Repository for the `home_video` table.

use homevideo_core::types::DbId;

use crate::models::home_video::{CreateHomeVideo, HomeVideo, UpdateHomeVideo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, year, director";

/// Provides CRUD operations for home videos.
///
/// Every write runs in its own transaction and is committed before the
/// method returns.
pub struct HomeVideoRepo;

impl HomeVideoRepo {
    /// Insert a new home video, returning the created row with its
    /// store-assigned `id`.
    pub async fn create(pool: &DbPool, input: &CreateHomeVideo) -> Result<HomeVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO home_video (name, category, year, director)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let video = sqlx::query_as::<_, HomeVideo>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.director)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(video)
    }

    /// Find a home video by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<HomeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM home_video WHERE id = ?1");
        sqlx::query_as::<_, HomeVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all home videos in ascending ID order.
    pub async fn list(pool: &DbPool) -> Result<Vec<HomeVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM home_video ORDER BY id");
        sqlx::query_as::<_, HomeVideo>(&query).fetch_all(pool).await
    }

    /// Count stored home videos.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM home_video")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a home video. Only non-`None` fields in `input` are applied.
    ///
    /// The existence check and the write share one transaction. Returns
    /// `None` if no row with the given `id` exists; an empty patch returns
    /// the stored row unchanged.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateHomeVideo,
    ) -> Result<Option<HomeVideo>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM home_video WHERE id = ?1");
        let Some(existing) = sqlx::query_as::<_, HomeVideo>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if input.is_empty() {
            tx.commit().await?;
            return Ok(Some(existing));
        }

        let query = format!(
            "UPDATE home_video SET
                name = COALESCE(?2, name),
                category = COALESCE(?3, category),
                year = COALESCE(?4, year),
                director = COALESCE(?5, director)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, HomeVideo>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.director)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(video))
    }

    /// Overwrite every mutable column of a home video, including setting
    /// `year` and `director` to NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &CreateHomeVideo,
    ) -> Result<Option<HomeVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE home_video SET name = ?2, category = ?3, year = ?4, director = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let video = sqlx::query_as::<_, HomeVideo>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.director)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(video)
    }

    /// Permanently delete a home video by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM home_video WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
