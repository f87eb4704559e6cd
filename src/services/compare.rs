//! Comparison service: turns a query into grouped, summarized offers.
//!
//! DESIGN
//! ======
//! The pipeline is linear: one shopping search, one grouping pass, then a
//! best pick and verdict per group. Group order is preserved in the output
//! so the page renders cards in the order groups were formed.

use client::net::types::{ComparisonGroup, Offer};

use super::grouping::group_listings;
use super::verdict::{generate_verdict, pick_best};
use crate::providers::{Listing, ProviderError};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Run a comparison for `query`.
///
/// # Errors
///
/// Returns [`CompareError::EmptyQuery`] for a blank query, or a provider
/// error if search or embedding fails.
pub async fn compare(state: &AppState, query: &str) -> Result<Vec<ComparisonGroup>, CompareError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CompareError::EmptyQuery);
    }

    let listings = state.shopping.search(query).await?;
    let found = listings.len();
    let groups = group_listings(listings, state.embedder.as_ref(), state.grouping).await?;
    let response: Vec<ComparisonGroup> = groups.into_iter().filter_map(build_group).collect();

    tracing::info!(query, listings = found, groups = response.len(), "comparison complete");
    Ok(response)
}

/// Build the wire group for one set of listings. `None` when empty.
#[must_use]
pub fn build_group(listings: Vec<Listing>) -> Option<ComparisonGroup> {
    let best = pick_best(&listings)?;
    let verdict = generate_verdict(&listings)?;
    let product = best.title.clone();
    let best = to_offer(best);
    let offers = listings.iter().map(to_offer).collect();
    Some(ComparisonGroup { product, verdict, offers, best: Some(best) })
}

fn to_offer(listing: &Listing) -> Offer {
    Offer {
        source: listing.source.clone(),
        price: listing.price,
        link: listing.link.clone(),
        title: Some(listing.title.clone()).filter(|t| !t.is_empty()),
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
