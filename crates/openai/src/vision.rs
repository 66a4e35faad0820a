//! Vision client producing a short appearance description for one dog photo.
//!
//! Wraps `POST /chat/completions` with an image attachment using [`reqwest`].
//! One call per photo; the caller decides how to handle per-photo failures.

use serde::Deserialize;

use crate::OpenAiConfig;

/// Model used for photo description.
const VISION_MODEL: &str = "gpt-4o";

/// Token budget for a 20-30 word description.
const DESCRIPTION_MAX_TOKENS: u32 = 100;

/// Instruction sent with every photo. Constrains the answer to the dog's
/// appearance so the text can be dropped into a scene prompt unchanged.
const DESCRIBE_INSTRUCTION: &str = "Here's a photo of my dog. Can you describe the dog in 20-30 words so it could be used as part of an image generation prompt? Focus just on the dog's appearance — like size, fur color, markings, ears, expression, and the breed you think it is (this doesn't have to be pure-bred but can be a mix but if it is a mix mention more than one breed). Ignore the background.";

/// Errors from the vision API layer.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Vision API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but carried no usable description.
    #[error("Vision API returned no completion choices")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// HTTP client for the vision description endpoint.
pub struct VisionApi {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl VisionApi {
    /// Create a new vision client.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across both OpenAI clients).
    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    /// Describe the dog in one photo.
    ///
    /// Sends the fixed instruction plus the photo URL and returns the
    /// model's text, trimmed.
    pub async fn describe_photo(&self, photo_url: &str) -> Result<String, VisionError> {
        tracing::debug!(photo_url, model = VISION_MODEL, "Requesting photo description");

        let body = serde_json::json!({
            "model": VISION_MODEL,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": DESCRIBE_INSTRUCTION },
                        { "type": "image_url", "image_url": { "url": photo_url } }
                    ]
                }
            ],
            "max_tokens": DESCRIPTION_MAX_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
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
            return Err(VisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(VisionError::EmptyResponse)?;

        let description = content.trim().to_string();
        if description.is_empty() {
            return Err(VisionError::EmptyResponse);
        }
        Ok(description)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
