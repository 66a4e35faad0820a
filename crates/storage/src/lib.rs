//! Durable image storage: S3 blob uploads plus the month-artifact row that
//! makes an upload visible to the application.

mod artifacts;
mod s3;

pub use artifacts::{ArtifactStore, StorageError};
pub use s3::{BlobError, S3BlobStore, S3Config};
