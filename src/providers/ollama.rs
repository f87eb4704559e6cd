//! Ollama embeddings client (`POST /api/embeddings`).

use serde::{Deserialize, Serialize};

use super::types::{Embedder, ProviderError};
use crate::config::{EmbeddingsConfig, ProviderTimeouts};

const PROVIDER: &str = "embeddings";

pub struct OllamaEmbedder {
    http: reqwest::Client,
    config: EmbeddingsConfig,
}

impl OllamaEmbedder {
    /// Build a client with request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: EmbeddingsConfig, timeouts: ProviderTimeouts) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[async_trait::async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let body = EmbedRequest { model: &self.config.model, prompt: text };
        let response = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request { provider: PROVIDER, message: e.to_string() })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Request { provider: PROVIDER, message: e.to_string() })?;

        if !(200..300).contains(&status) {
            return Err(ProviderError::Status { provider: PROVIDER, status, body: text });
        }
        parse_embedding_response(&text)
    }
}

/// Extract the embedding vector from a response body.
///
/// # Errors
///
/// Returns [`ProviderError::Parse`] if the body lacks an `embedding` array
/// or the array is empty.
pub fn parse_embedding_response(body: &str) -> Result<Vec<f32>, ProviderError> {
    let parsed: EmbedResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse { provider: PROVIDER, message: e.to_string() })?;
    if parsed.embedding.is_empty() {
        return Err(ProviderError::Parse { provider: PROVIDER, message: "empty embedding".into() });
    }
    Ok(parsed.embedding)
}
