//! Image generation client: prompt in, image bytes out.
//!
//! Wraps `POST /images/generations` plus the follow-up download of the
//! temporary URL the service returns. Generation failure and download
//! failure are distinct error variants: a failed download has already paid
//! for a successful generation, and retry policy upstream may want to know
//! the difference.

use serde::Deserialize;

use crate::OpenAiConfig;

/// Model used for calendar image generation.
const IMAGE_MODEL: &str = "dall-e-3";

/// Landscape calendar aspect.
const IMAGE_SIZE: &str = "1792x1024";

/// Highest available quality tier.
const IMAGE_QUALITY: &str = "hd";

/// Errors from the image generation layer.
#[derive(Debug, thiserror::Error)]
pub enum ImagesError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The generation endpoint returned a non-2xx status code.
    #[error("Image API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but carried no image URL.
    #[error("Image API returned no image data")]
    EmptyResponse,

    /// The generated image could not be fetched from its temporary URL.
    /// The generation itself succeeded.
    #[error("Image download failed ({status})")]
    Download {
        /// HTTP status code from the download attempt.
        status: u16,
    },
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

/// HTTP client for the image generation endpoint.
pub struct ImagesApi {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl ImagesApi {
    /// Create a new image generation client.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    /// Generate a single landscape image for the prompt.
    ///
    /// Returns the temporary URL the service hosts the result at. The URL
    /// is short-lived; callers should [`download`](Self::download) promptly.
    pub async fn generate(&self, prompt: &str) -> Result<String, ImagesError> {
        tracing::debug!(
            model = IMAGE_MODEL,
            prompt_len = prompt.len(),
            "Requesting image generation"
        );

        let body = serde_json::json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": IMAGE_SIZE,
            "quality": IMAGE_QUALITY,
        });

        let response = self
            .client
            .post(format!("{}/images/generations", self.config.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImagesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ImagesResponse = response.json().await?;
        parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or(ImagesError::EmptyResponse)
    }

    /// Fetch the generated image bytes from its temporary URL.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ImagesError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImagesError::Download {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
