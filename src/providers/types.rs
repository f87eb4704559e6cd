//! Provider-neutral listing type, traits, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by shopping and embedding providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request to the provider failed.
    #[error("{provider} request failed: {message}")]
    Request { provider: &'static str, message: String },

    /// The provider returned a non-success HTTP status.
    #[error("{provider} response error: status {status}")]
    Status { provider: &'static str, status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("{provider} response parse failed: {message}")]
    Parse { provider: &'static str, message: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// LISTING
// =============================================================================

/// One shopping-search hit with a parsed numeric price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub source: String,
    pub link: Option<String>,
}

// =============================================================================
// TRAITS
// =============================================================================

/// Product search against a shopping index.
#[async_trait::async_trait]
pub trait ShoppingSearch: Send + Sync {
    /// Return priced listings for `query` in provider order.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the response is
    /// malformed.
    async fn search(&self, query: &str) -> Result<Vec<Listing>, ProviderError>;
}

/// Text embedding model.
#[async_trait::async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the response is
    /// malformed.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;
}
