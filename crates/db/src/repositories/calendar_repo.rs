//! Repository for the `calendar_months` table.

use sqlx::PgPool;

use pawprints_core::types::DbId;

use crate::models::calendar::CalendarMonth;

/// Column list for `calendar_months` queries.
const COLUMNS: &str = "id, generation_id, month, image_url, created_at";

/// Provides month-artifact persistence for calendar generations.
pub struct CalendarRepo;

impl CalendarRepo {
    /// Insert or replace the artifact row for one (generation, month) pair.
    ///
    /// Uses `ON CONFLICT` against `uq_calendar_months_generation_month` so a
    /// retried or regenerated month overwrites its previous row — at most
    /// one artifact ever exists per month.
    pub async fn upsert(
        pool: &PgPool,
        generation_id: DbId,
        month: i32,
        image_url: &str,
    ) -> Result<CalendarMonth, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_months (generation_id, month, image_url) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (generation_id, month) DO UPDATE \
                 SET image_url = EXCLUDED.image_url, created_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarMonth>(&query)
            .bind(generation_id)
            .bind(month)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// List a generation's stored months in calendar order.
    pub async fn list_for_generation(
        pool: &PgPool,
        generation_id: DbId,
    ) -> Result<Vec<CalendarMonth>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_months \
             WHERE generation_id = $1 \
             ORDER BY month ASC"
        );
        sqlx::query_as::<_, CalendarMonth>(&query)
            .bind(generation_id)
            .fetch_all(pool)
            .await
    }

    /// Whether an artifact exists for the given month.
    pub async fn month_exists(
        pool: &PgPool,
        generation_id: DbId,
        month: i32,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (\
                 SELECT 1 FROM calendar_months \
                 WHERE generation_id = $1 AND month = $2\
             )",
        )
        .bind(generation_id)
        .bind(month)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Number of months with a stored artifact.
    pub async fn count_for_generation(
        pool: &PgPool,
        generation_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM calendar_months WHERE generation_id = $1",
        )
        .bind(generation_id)
        .fetch_one(pool)
        .await
    }
}
