//! Remote recognition service client
//!
//! Talks to a hosted pre-trained image-to-text model over HTTP. The
//! endpoint is expected to accept `{"image": <base64>, "language": <code>}`
//! and respond with `{"text": "..."}` — the shape served by common
//! self-hosted TrOCR/EasyOCR wrappers.
//!
//! # Configuration
//!
//! The endpoint comes from the constructor or the `LIPI_OCR_ENDPOINT`
//! environment variable; an optional bearer token is read from
//! `LIPI_OCR_API_KEY`.

use crate::error::{LipiError, LipiResult};
use crate::recognize::TextRecognizer;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use tracing::info;

/// HTTP client for a remote recognition service.
#[derive(Clone)]
pub struct RemoteOcrProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
    language: String,
}

impl RemoteOcrProvider {
    /// Largest accepted image upload (10 MiB).
    const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    /// Create a provider for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Recognition service URL
    /// * `api_key` - Optional bearer token
    pub fn new(endpoint: String, api_key: Option<String>) -> LipiResult<Self> {
        if endpoint.trim().is_empty() {
            return Err(LipiError::ConfigError(
                "Recognition endpoint cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| LipiError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key,
            client,
            language: "te".to_string(),
        })
    }

    /// Create a provider from `LIPI_OCR_ENDPOINT` / `LIPI_OCR_API_KEY`.
    pub fn from_env() -> LipiResult<Self> {
        let endpoint = std::env::var("LIPI_OCR_ENDPOINT").map_err(|_| {
            LipiError::ConfigError("LIPI_OCR_ENDPOINT environment variable not set".to_string())
        })?;
        let api_key = std::env::var("LIPI_OCR_API_KEY").ok();

        Self::new(endpoint, api_key)
    }

    /// Override the recognition language code (default "te").
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    async fn extract(&self, image: &[u8]) -> LipiResult<String> {
        let body = json!({
            "image": BASE64.encode(image),
            "language": self.language,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                LipiError::ConfigError(format!(
                    "Recognition client error ({}): {}",
                    status, error_text
                ))
            } else {
                LipiError::RecognitionError(format!(
                    "Recognition server error ({}): {}",
                    status, error_text
                ))
            });
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            LipiError::RecognitionError(format!("Failed to parse recognition response: {}", e))
        })?;

        let text = payload["text"].as_str().ok_or_else(|| {
            LipiError::RecognitionError(
                "Invalid recognition response: missing 'text' field".to_string(),
            )
        })?;

        if text.trim().is_empty() {
            return Err(LipiError::RecognitionError(
                "Recognition service returned no text".to_string(),
            ));
        }

        info!(chars = text.chars().count(), "recognition completed");
        Ok(text.to_string())
    }
}

impl std::fmt::Debug for RemoteOcrProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteOcrProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("language", &self.language)
            .finish()
    }
}

#[async_trait]
impl TextRecognizer for RemoteOcrProvider {
    async fn recognize(&self, image: &[u8]) -> LipiResult<String> {
        if image.is_empty() {
            return Err(LipiError::RecognitionError(
                "empty image input".to_string(),
            ));
        }

        if image.len() > Self::MAX_IMAGE_BYTES {
            return Err(LipiError::RecognitionError(format!(
                "Image exceeds maximum size of {} bytes",
                Self::MAX_IMAGE_BYTES
            )));
        }

        self.extract(image).await
    }

    fn recognizer_name(&self) -> &str {
        "Remote OCR"
    }
}
