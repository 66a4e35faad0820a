//! Calendar month artifact model.

use pawprints_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `calendar_months` table: the stored image for one month of
/// one generation. Rows never change state — they exist or they don't, and a
/// regenerated month overwrites its row via upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarMonth {
    pub id: DbId,
    pub generation_id: DbId,
    pub month: i32,
    pub image_url: String,
    pub created_at: Timestamp,
}
