//! Repository for the `generations` table.
//!
//! Status transitions go through [`GenerationStatus`] — no magic numbers.
//! The description cache is written with a NULL-guarded UPDATE so it is
//! write-once at the database level, not just by convention.

use sqlx::types::Json;
use sqlx::PgPool;

use pawprints_core::types::DbId;

use crate::models::generation::{CreateGenerationRequest, Generation};
use crate::models::status::GenerationStatus;

/// Column list for `generations` queries.
const COLUMNS: &str = "\
    id, user_id, owner_email, title, artist_style, photo_urls, \
    dog_descriptions, status_id, created_at, updated_at, completed_at";

/// Provides CRUD operations for calendar generations.
pub struct GenerationRepo;

impl GenerationRepo {
    /// Create a new generation in `processing_preview`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        owner_email: &str,
        input: &CreateGenerationRequest,
    ) -> Result<Generation, sqlx::Error> {
        let query = format!(
            "INSERT INTO generations \
                 (user_id, owner_email, title, artist_style, photo_urls, status_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Generation>(&query)
            .bind(user_id)
            .bind(owner_email)
            .bind(&input.title)
            .bind(&input.artist_style)
            .bind(Json(&input.photo_urls))
            .bind(GenerationStatus::ProcessingPreview.id())
            .fetch_one(pool)
            .await
    }

    /// Fetch a generation by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Generation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM generations WHERE id = $1");
        sqlx::query_as::<_, Generation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's generations, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Generation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generations \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Generation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Persist the resolved dog descriptions, but only if none are cached
    /// yet.
    ///
    /// Returns `true` when this call wrote the cache, `false` when another
    /// resolution got there first (or the row is gone). The NULL guard makes
    /// the description cache write-once regardless of how many preview calls
    /// race.
    pub async fn cache_descriptions(
        pool: &PgPool,
        id: DbId,
        descriptions: &[String],
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE generations \
             SET dog_descriptions = $2, updated_at = NOW() \
             WHERE id = $1 AND dog_descriptions IS NULL",
        )
        .bind(id)
        .bind(Json(descriptions))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update the generation status.
    ///
    /// A missing row makes this a no-op rather than an error: the owner may
    /// delete a generation while its background run is still in flight.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: GenerationStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE generations SET status_id = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status.id())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Write the terminal status of a full run, stamping `completed_at` only
    /// for fully completed calendars.
    ///
    /// Same no-op-if-deleted semantics as [`Self::set_status`].
    pub async fn finalize(
        pool: &PgPool,
        id: DbId,
        status: GenerationStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE generations \
             SET status_id = $2, updated_at = NOW(), \
                 completed_at = CASE WHEN $3 THEN NOW() ELSE completed_at END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(status.id())
        .bind(status == GenerationStatus::Completed)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a generation (cascades to its calendar months).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM generations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
