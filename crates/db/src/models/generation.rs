//! Generation entity model and request/response DTOs.

use pawprints_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::calendar::CalendarMonth;
use crate::models::status::{GenerationStatus, StatusId};

/// A row from the `generations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Generation {
    pub id: DbId,
    pub user_id: DbId,
    pub owner_email: String,
    pub title: String,
    pub artist_style: String,
    pub photo_urls: Json<Vec<String>>,
    pub dog_descriptions: Option<Json<Vec<String>>>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl Generation {
    /// Typed view of `status_id`. `None` only if the row predates the
    /// current lookup seed, which a migration would have to introduce.
    pub fn status(&self) -> Option<GenerationStatus> {
        GenerationStatus::from_id(self.status_id)
    }

    /// Client-facing status name.
    pub fn status_str(&self) -> &'static str {
        self.status().map(GenerationStatus::as_str).unwrap_or("unknown")
    }

    /// Cached dog descriptions, if the describer has already run.
    pub fn descriptions(&self) -> Option<&[String]> {
        self.dog_descriptions.as_ref().map(|d| d.0.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /generations`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenerationRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 60))]
    pub artist_style: String,
    #[validate(length(min = 1, max = 6))]
    pub photo_urls: Vec<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// Response for `POST /generations/{id}/preview`.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub generation_id: DbId,
    pub status: &'static str,
    pub image_url: String,
}

/// Acknowledgment for `POST /generations/{id}/purchase`.
///
/// The full run continues in the background; progress is observable only by
/// polling the generation's status.
#[derive(Debug, Clone, Serialize)]
pub struct FullRunAccepted {
    pub generation_id: DbId,
    pub status: &'static str,
}

/// Response for `GET /generations/{id}`: the generation plus its stored
/// months.
#[derive(Debug, Serialize)]
pub struct GenerationDetail {
    #[serde(flatten)]
    pub generation: Generation,
    pub status: &'static str,
    pub months: Vec<CalendarMonth>,
}
