//! HTTP clients for the OpenAI endpoints the pipeline depends on: vision
//! chat completions (dog description) and image generation.

pub mod images;
pub mod vision;

/// Default API base URL.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Connection settings shared by both clients.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token for the `Authorization` header.
    pub api_key: String,
    /// Base URL, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Required | Default                     |
    /// |-------------------|----------|-----------------------------|
    /// | `OPENAI_API_KEY`  | **yes**  | --                          |
    /// | `OPENAI_API_BASE` | no       | `https://api.openai.com/v1` |
    ///
    /// # Panics
    ///
    /// Panics if `OPENAI_API_KEY` is not set. Misconfiguration should fail
    /// at startup, not on the first paid call.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set in the environment");
        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self { api_key, api_base }
    }
}
