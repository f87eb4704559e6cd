//! Wire types for the `/compare` endpoint.
//!
//! DESIGN
//! ======
//! These types are the single definition of the comparison payload: the
//! server serializes them and the browser deserializes them. Optional fields
//! default when absent so older or trimmed payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One seller's price quote for a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub source: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Listing title as reported by the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One product's aggregated offers plus a summary verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonGroup {
    pub product: String,
    pub verdict: String,
    #[serde(default)]
    pub offers: Vec<Offer>,
    /// Cheapest offer in `offers`, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best: Option<Offer>,
}

/// Error body returned by the server for failed comparisons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
