//! Clusters shopping hits that describe the same variant.
//!
//! DESIGN
//! ======
//! Two gates decide membership. A cheap title signature (model, variant,
//! storage) must match first; then the listing's title embedding must be at
//! least `similarity_threshold` cosine-similar to the group's first member.
//! A listing joins the first group that passes both, otherwise it starts a
//! new group. Group order follows first appearance.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::GroupingConfig;
use crate::providers::{Embedder, Listing, ProviderError};

// =============================================================================
// SIGNATURE
// =============================================================================

/// Product line tier parsed from a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    ProMax,
    Pro,
    Plus,
    Base,
}

/// Coarse identity of a listing derived from its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub model: Option<String>,
    pub variant: Variant,
    /// Storage size in GB, as written in the title.
    pub storage: Option<String>,
}

impl Signature {
    /// Model and variant must be equal; storage must agree when both sides
    /// state it.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        if self.model != other.model || self.variant != other.variant {
            return false;
        }
        match (&self.storage, &other.storage) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

fn model_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"iphone\s*(\d+)").expect("model pattern"))
}

fn storage_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*gb").expect("storage pattern"))
}

/// Parse the signature of a listing title (case-insensitive).
#[must_use]
pub fn extract_signature(title: &str) -> Signature {
    let t = title.to_lowercase();

    let capture = |re: &Regex| re.captures(&t).and_then(|c| c.get(1)).map(|m| m.as_str().to_owned());

    let variant = if t.contains("pro max") {
        Variant::ProMax
    } else if t.contains("pro") {
        Variant::Pro
    } else if t.contains("plus") {
        Variant::Plus
    } else {
        Variant::Base
    };

    Signature { model: capture(model_re()), variant, storage: capture(storage_re()) }
}

// =============================================================================
// SIMILARITY
// =============================================================================

/// Cosine similarity of two vectors. Mismatched lengths or a zero-length
/// vector yield `0.0`.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// =============================================================================
// GROUPING
// =============================================================================

struct Bucket {
    signature: Signature,
    embedding: Vec<f32>,
    listings: Vec<Listing>,
}

/// Embed each distinct title once, in first-appearance order.
async fn embed_titles(listings: &[Listing], embedder: &dyn Embedder) -> Result<HashMap<String, Vec<f32>>, ProviderError> {
    let mut embeddings = HashMap::new();
    for listing in listings {
        if embeddings.contains_key(&listing.title) {
            continue;
        }
        let embedding = embedder.embed(&listing.title).await?;
        embeddings.insert(listing.title.clone(), embedding);
    }
    Ok(embeddings)
}

/// Group listings that describe the same product variant.
///
/// Only the first `config.max_listings` listings are considered.
///
/// # Errors
///
/// Returns a [`ProviderError`] if any title embedding fails.
pub async fn group_listings(
    mut listings: Vec<Listing>,
    embedder: &dyn Embedder,
    config: GroupingConfig,
) -> Result<Vec<Vec<Listing>>, ProviderError> {
    listings.truncate(config.max_listings);
    let embeddings = embed_titles(&listings, embedder).await?;

    let mut buckets: Vec<Bucket> = Vec::new();
    for listing in listings {
        let Some(embedding) = embeddings.get(&listing.title) else {
            continue;
        };
        let signature = extract_signature(&listing.title);

        let home = buckets.iter_mut().find(|b| {
            b.signature.matches(&signature) && cosine(embedding, &b.embedding) >= config.similarity_threshold
        });
        match home {
            Some(bucket) => bucket.listings.push(listing),
            None => buckets.push(Bucket { signature, embedding: embedding.clone(), listings: vec![listing] }),
        }
    }

    tracing::debug!(groups = buckets.len(), "grouped listings");
    Ok(buckets.into_iter().map(|b| b.listings).collect())
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;
