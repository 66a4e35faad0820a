//! Port traits decoupling the orchestrator from its collaborators.
//!
//! Each external dependency of the pipeline — vision description, image
//! synthesis, artifact storage, completion notification, and the generation
//! record itself — sits behind one of these traits. Production adapters live
//! in [`crate::adapters`]; tests supply in-memory fakes.

use async_trait::async_trait;

use pawprints_core::types::DbId;
use pawprints_db::models::generation::Generation;
use pawprints_db::models::status::GenerationStatus;
use pawprints_notify::EmailError;
use pawprints_openai::images::ImagesError;
use pawprints_openai::vision::VisionError;
use pawprints_storage::StorageError;

/// Produces a short appearance description for one dog photo.
#[async_trait]
pub trait SubjectDescriber: Send + Sync {
    async fn describe(&self, photo_url: &str) -> Result<String, VisionError>;
}

/// Turns a rendered prompt into finished image bytes.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    async fn synthesize(&self, prompt: &str) -> Result<Vec<u8>, ImagesError>;
}

/// Persists one month's image durably and returns its public URL.
#[async_trait]
pub trait MonthArtifactStore: Send + Sync {
    async fn store_month(
        &self,
        generation_id: DbId,
        month: u32,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}

/// Sends the completion message once a full run finishes.
#[async_trait]
pub trait CompletionNotifier: Send + Sync {
    async fn deliver(
        &self,
        to_email: &str,
        calendar_title: &str,
        status: &str,
        months_succeeded: u32,
    ) -> Result<(), EmailError>;
}

/// Reads and writes the generation record the pipeline runs against.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Fetch the generation row.
    async fn load(&self, id: DbId) -> Result<Option<Generation>, sqlx::Error>;

    /// Persist resolved descriptions if none are cached yet; `true` when
    /// this call wrote them.
    async fn cache_descriptions(
        &self,
        id: DbId,
        descriptions: &[String],
    ) -> Result<bool, sqlx::Error>;

    /// Update the lifecycle status (no-op if the row was deleted).
    async fn set_status(&self, id: DbId, status: GenerationStatus) -> Result<(), sqlx::Error>;

    /// Write the terminal status, stamping `completed_at` for completed runs
    /// (no-op if the row was deleted).
    async fn finalize(&self, id: DbId, status: GenerationStatus) -> Result<(), sqlx::Error>;

    /// Whether an artifact exists for the given month.
    async fn month_exists(&self, id: DbId, month: u32) -> Result<bool, sqlx::Error>;

    /// Number of months with a stored artifact.
    async fn month_count(&self, id: DbId) -> Result<u32, sqlx::Error>;
}
