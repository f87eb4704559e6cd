//! Outbound provider adapters for shopping search and text embeddings.
//!
//! DESIGN
//! ======
//! Each provider sits behind a trait in `types` so the comparison pipeline
//! can run against mocks in tests. Concrete clients own a `reqwest::Client`
//! built with the configured timeouts.

pub mod ollama;
pub mod serpapi;
pub mod types;

pub use types::{Embedder, Listing, ProviderError, ShoppingSearch};
