//! Pipeline error taxonomy.

use pawprints_core::error::CoreError;
use pawprints_core::types::DbId;
use pawprints_openai::images::ImagesError;
use pawprints_storage::StorageError;

/// Errors surfaced by the orchestrator.
///
/// Per-photo description failures and per-month generation failures are
/// handled inside the pipeline (fallback text, retry-then-continue) and
/// never appear here; these variants are the failures that abort a phase.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The generation row does not exist.
    #[error("Generation {0} not found")]
    NotFound(DbId),

    /// The generation is in a state the requested phase cannot run from.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Every uploaded photo failed description; no usable output exists.
    #[error("Description failed for all uploaded photos")]
    DescriptionFailed,

    /// A domain-level error (month validation, template selection).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Image generation or download failed during the preview phase.
    #[error("Image synthesis failed: {0}")]
    Synthesis(#[from] ImagesError),

    /// Artifact persistence failed during the preview phase.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A database read or status write failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
