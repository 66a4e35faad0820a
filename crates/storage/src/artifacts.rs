//! Month-artifact persistence: blob upload plus the database row that makes
//! the image visible to clients.

use sqlx::PgPool;

use pawprints_core::calendar::artifact_key;
use pawprints_core::types::DbId;
use pawprints_db::repositories::CalendarRepo;

use crate::s3::{BlobError, S3BlobStore};

/// Calendar images are always stored as PNG.
const IMAGE_CONTENT_TYPE: &str = "image/png";

/// Errors from storing a month artifact.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Blob upload failed; no row was written.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// The artifact row could not be written after a successful upload.
    #[error("Artifact row write failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Stores generated month images durably.
///
/// Storage is idempotent per (generation, month): the blob key is
/// deterministic and the row write is an upsert, so a retried store leaves
/// exactly one logical artifact.
pub struct ArtifactStore {
    blob: S3BlobStore,
    pool: PgPool,
}

impl ArtifactStore {
    /// Create an artifact store.
    pub fn new(blob: S3BlobStore, pool: PgPool) -> Self {
        Self { blob, pool }
    }

    /// Persist one month's image bytes and record its row.
    ///
    /// Returns the public URL of the stored image.
    pub async fn store_month(
        &self,
        generation_id: DbId,
        month: u32,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let key = artifact_key(generation_id, month);
        let url = self.blob.put(&key, bytes, IMAGE_CONTENT_TYPE).await?;

        CalendarRepo::upsert(&self.pool, generation_id, month as i32, &url).await?;

        tracing::info!(generation_id, month, url = %url, "Month artifact stored");
        Ok(url)
    }
}
