//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the shopping and embedding providers as trait objects plus the
//! grouping settings. Nothing is cached between requests.

use std::sync::Arc;

use crate::config::{AppConfig, GroupingConfig};
use crate::providers::ollama::OllamaEmbedder;
use crate::providers::serpapi::SerpApiClient;
use crate::providers::{Embedder, ProviderError, ShoppingSearch};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub shopping: Arc<dyn ShoppingSearch>,
    pub embedder: Arc<dyn Embedder>,
    pub grouping: GroupingConfig,
}

impl AppState {
    #[must_use]
    pub fn new(shopping: Arc<dyn ShoppingSearch>, embedder: Arc<dyn Embedder>, grouping: GroupingConfig) -> Self {
        Self { shopping, embedder, grouping }
    }

    /// Build the production providers from config.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let shopping = SerpApiClient::new(config.shopping.clone(), config.timeouts)?;
        let embedder = OllamaEmbedder::new(config.embeddings.clone(), config.timeouts)?;
        Ok(Self::new(Arc::new(shopping), Arc::new(embedder), config.grouping))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::providers::Listing;

    /// Build a listing with a link derived from the source name.
    #[must_use]
    pub fn listing(title: &str, price: f64, source: &str) -> Listing {
        Listing {
            title: title.into(),
            price,
            source: source.into(),
            link: Some(format!("https://{}.test/item", source.to_lowercase())),
        }
    }

    /// Shopping search returning canned listings and recording queries.
    #[derive(Clone)]
    pub struct MockShopping {
        listings: Option<Vec<Listing>>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockShopping {
        pub fn returning(listings: Vec<Listing>) -> Self {
            Self { listings: Some(listings), queries: Arc::default() }
        }

        /// Every search fails with a 503 status.
        pub fn failing() -> Self {
            Self { listings: None, queries: Arc::default() }
        }

        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ShoppingSearch for MockShopping {
        async fn search(&self, query: &str) -> Result<Vec<Listing>, ProviderError> {
            self.queries.lock().unwrap().push(query.to_owned());
            self.listings.clone().ok_or_else(|| ProviderError::Status {
                provider: "mock",
                status: 503,
                body: "unavailable".into(),
            })
        }
    }

    /// Embedder with fixed vectors per title, or one vector for all titles.
    #[derive(Clone)]
    pub struct MockEmbedder {
        vectors: HashMap<String, Vec<f32>>,
        fallback: Option<Vec<f32>>,
        calls: Arc<AtomicUsize>,
    }

    impl MockEmbedder {
        pub fn new(pairs: &[(&str, Vec<f32>)]) -> Self {
            Self {
                vectors: pairs.iter().map(|(t, v)| ((*t).to_owned(), v.clone())).collect(),
                fallback: None,
                calls: Arc::default(),
            }
        }

        pub fn uniform(vector: Vec<f32>) -> Self {
            Self { vectors: HashMap::new(), fallback: Some(vector), calls: Arc::default() }
        }

        /// Every embed call fails with a request error.
        pub fn failing() -> Self {
            Self { vectors: HashMap::new(), fallback: None, calls: Arc::default() }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Embedder for MockEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.vectors
                .get(text)
                .or(self.fallback.as_ref())
                .cloned()
                .ok_or_else(|| ProviderError::Request { provider: "mock", message: format!("no vector for {text:?}") })
        }
    }

    /// Create a test `AppState` backed by mocks and default grouping.
    #[must_use]
    pub fn test_app_state(shopping: MockShopping, embedder: MockEmbedder) -> AppState {
        AppState::new(Arc::new(shopping), Arc::new(embedder), GroupingConfig::default())
    }
}
