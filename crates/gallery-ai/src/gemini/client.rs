//! Reqwest-backed Gemini client.
//!
//! Transport only. Prompts live in `prompts`, fallbacks in the service layer.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use gallery_common::GenerationConfig;
use gallery_core::{Category, ContentGenerator, GeneratedImage, GenerationError, GenerationResult};

use super::dto::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use super::prompts::{description_prompt, illustration_prompt};

const API_KEY_HEADER: &str = "x-goog-api-key";
const IMAGE_ASPECT_RATIO: &str = "1:1";
const MAX_ERROR_BODY: usize = 256;

/// Gemini adapter for the `ContentGenerator` port
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Build a client with an explicit request timeout
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            text_model: text_model.into(),
            image_model: image_model.into(),
        })
    }

    /// Build a client from configuration; fails when no credential is set
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GenerationError::Unavailable("GENERATION_API_KEY is not set".into()))?;

        Self::new(
            &config.endpoint,
            api_key,
            &config.text_model,
            &config.image_model,
            config.timeout(),
        )
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> GenerationResult<GenerateContentResponse> {
        let response = self
            .client
            .post(self.url(model))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|e| GenerationError::InvalidResponse(format!("invalid JSON payload: {e}")))
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    #[instrument(skip(self), fields(model = %self.text_model))]
    async fn describe(&self, title: &str, category: Category) -> GenerationResult<String> {
        let prompt = description_prompt(title, category);
        let response = self
            .generate(&self.text_model, &GenerateContentRequest::text(&prompt))
            .await?;

        let text = response.text().trim().to_string();
        debug!(len = text.len(), "Description generated");
        Ok(text)
    }

    #[instrument(skip(self, tags), fields(model = %self.image_model))]
    async fn illustrate(
        &self,
        title: &str,
        category: Category,
        tags: &[String],
    ) -> GenerationResult<Option<GeneratedImage>> {
        let prompt = illustration_prompt(title, category, tags);
        let request = GenerateContentRequest::image(&prompt, IMAGE_ASPECT_RATIO);
        let response = self.generate(&self.image_model, &request).await?;

        let Some(inline) = response.inline_data() else {
            debug!("Response carried no image");
            return Ok(None);
        };
        let data = STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| GenerationError::InvalidResponse(format!("invalid image payload: {e}")))?;

        debug!(bytes = data.len(), mime = %inline.mime_type, "Image generated");
        Ok(Some(GeneratedImage::new(inline.mime_type.clone(), data)))
    }
}

fn map_transport_error(error: reqwest::Error) -> GenerationError {
    GenerationError::Transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GenerationError {
    let message = serde_json::from_slice::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let raw = String::from_utf8_lossy(body);
            raw.chars().take(MAX_ERROR_BODY).collect()
        });

    GenerationError::Api {
        status: status.as_u16(),
        message,
    }
}
