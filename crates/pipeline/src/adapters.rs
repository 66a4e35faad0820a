//! Production implementations of the port traits.

use async_trait::async_trait;
use sqlx::PgPool;

use pawprints_core::types::DbId;
use pawprints_db::models::generation::Generation;
use pawprints_db::models::status::GenerationStatus;
use pawprints_db::repositories::{CalendarRepo, GenerationRepo};
use pawprints_notify::{CalendarMailer, EmailError};
use pawprints_openai::images::{ImagesApi, ImagesError};
use pawprints_openai::vision::{VisionApi, VisionError};
use pawprints_storage::{ArtifactStore, StorageError};

use crate::ports::{
    CompletionNotifier, GenerationStore, ImageSynthesizer, MonthArtifactStore, SubjectDescriber,
};

#[async_trait]
impl SubjectDescriber for VisionApi {
    async fn describe(&self, photo_url: &str) -> Result<String, VisionError> {
        self.describe_photo(photo_url).await
    }
}

#[async_trait]
impl ImageSynthesizer for ImagesApi {
    /// Generate and immediately download, while the temporary URL is fresh.
    async fn synthesize(&self, prompt: &str) -> Result<Vec<u8>, ImagesError> {
        let url = self.generate(prompt).await?;
        self.download(&url).await
    }
}

#[async_trait]
impl MonthArtifactStore for ArtifactStore {
    async fn store_month(
        &self,
        generation_id: DbId,
        month: u32,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        ArtifactStore::store_month(self, generation_id, month, bytes).await
    }
}

#[async_trait]
impl CompletionNotifier for CalendarMailer {
    async fn deliver(
        &self,
        to_email: &str,
        calendar_title: &str,
        status: &str,
        months_succeeded: u32,
    ) -> Result<(), EmailError> {
        CalendarMailer::deliver(self, to_email, calendar_title, status, months_succeeded).await
    }
}

/// Notifier used when SMTP is not configured: logs the outcome and drops it.
pub struct NoopNotifier;

#[async_trait]
impl CompletionNotifier for NoopNotifier {
    async fn deliver(
        &self,
        to_email: &str,
        _calendar_title: &str,
        status: &str,
        months_succeeded: u32,
    ) -> Result<(), EmailError> {
        tracing::info!(
            to = to_email,
            status,
            months_succeeded,
            "Email delivery not configured; completion notification skipped",
        );
        Ok(())
    }
}

/// Postgres-backed [`GenerationStore`] delegating to the repositories.
pub struct PgGenerationStore {
    pool: PgPool,
}

impl PgGenerationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationStore for PgGenerationStore {
    async fn load(&self, id: DbId) -> Result<Option<Generation>, sqlx::Error> {
        GenerationRepo::find_by_id(&self.pool, id).await
    }

    async fn cache_descriptions(
        &self,
        id: DbId,
        descriptions: &[String],
    ) -> Result<bool, sqlx::Error> {
        GenerationRepo::cache_descriptions(&self.pool, id, descriptions).await
    }

    async fn set_status(&self, id: DbId, status: GenerationStatus) -> Result<(), sqlx::Error> {
        GenerationRepo::set_status(&self.pool, id, status).await
    }

    async fn finalize(&self, id: DbId, status: GenerationStatus) -> Result<(), sqlx::Error> {
        GenerationRepo::finalize(&self.pool, id, status).await
    }

    async fn month_exists(&self, id: DbId, month: u32) -> Result<bool, sqlx::Error> {
        CalendarRepo::month_exists(&self.pool, id, month as i32).await
    }

    async fn month_count(&self, id: DbId) -> Result<u32, sqlx::Error> {
        let count = CalendarRepo::count_for_generation(&self.pool, id).await?;
        Ok(count.max(0) as u32)
    }
}
