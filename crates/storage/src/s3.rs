//! S3-backed blob store with upsert-by-key semantics.
//!
//! `put_object` is last-writer-wins for a fixed key, which is exactly the
//! overwrite behaviour retries need: storing the same key twice leaves one
//! object.

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStream;

/// Errors from the blob storage layer.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The S3 upload failed.
    #[error("S3 upload failed: {0}")]
    Upload(#[from] SdkError<PutObjectError>),
}

/// Configuration for the S3 blob store.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket receiving calendar images.
    pub bucket: String,
    /// Base URL public object links are built from (no trailing slash).
    pub public_base_url: String,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Required | Default                                 |
    /// |----------------------|----------|-----------------------------------------|
    /// | `S3_BUCKET`          | **yes**  | --                                      |
    /// | `S3_PUBLIC_URL_BASE` | no       | `https://{bucket}.s3.amazonaws.com`     |
    ///
    /// AWS credentials and region resolve through the standard SDK chain.
    ///
    /// # Panics
    ///
    /// Panics if `S3_BUCKET` is not set.
    pub fn from_env() -> Self {
        let bucket = std::env::var("S3_BUCKET").expect("S3_BUCKET must be set in the environment");
        let public_base_url = std::env::var("S3_PUBLIC_URL_BASE")
            .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"));
        let public_base_url = public_base_url.trim_end_matches('/').to_string();
        Self {
            bucket,
            public_base_url,
        }
    }
}

/// Uploads blobs to a single S3 bucket and hands back public URLs.
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    config: S3Config,
}

impl S3BlobStore {
    /// Create a blob store from explicit parts.
    pub fn new(client: aws_sdk_s3::Client, config: S3Config) -> Self {
        Self { client, config }
    }

    /// Create a blob store using the ambient AWS credential chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            config: S3Config::from_env(),
        }
    }

    /// Upload bytes under `key`, overwriting any existing object, and return
    /// the public URL.
    pub async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await?;

        tracing::debug!(key, size, bucket = %self.config.bucket, "Blob uploaded");
        Ok(self.public_url(key))
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.config.public_base_url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> aws_sdk_s3::Client {
        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        aws_sdk_s3::Client::from_conf(sdk_config)
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = S3BlobStore::new(
            test_client(),
            S3Config {
                bucket: "calendars".to_string(),
                public_base_url: "https://cdn.example.com".to_string(),
            },
        );
        assert_eq!(
            store.public_url("calendar_7_january.png"),
            "https://cdn.example.com/calendar_7_january.png"
        );
    }
}
