//! SerpAPI Google Shopping client.
//!
//! Issues one `GET` per query and keeps only listings whose price parses.
//! Listings without an outbound link fall back to a Google search for the
//! listing title.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use super::types::{Listing, ProviderError, ShoppingSearch};
use crate::config::{ProviderTimeouts, ShoppingConfig};

const PROVIDER: &str = "serpapi";
const ENGINE: &str = "google_shopping";
const SEARCH_FALLBACK_URL: &str = "https://www.google.com/search";

/// Rupee sign as it appears in correctly decoded and mis-decoded payloads.
const RUPEE_SIGNS: [&str; 2] = ["\u{20B9}", "\u{e2}\u{201a}\u{b9}"];

pub struct SerpApiClient {
    http: reqwest::Client,
    config: ShoppingConfig,
}

impl SerpApiClient {
    /// Build a client with request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ShoppingConfig, timeouts: ProviderTimeouts) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl ShoppingSearch for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Listing>, ProviderError> {
        let params = [
            ("engine", ENGINE),
            ("q", query),
            ("hl", self.config.language.as_str()),
            ("gl", self.config.country.as_str()),
            ("api_key", self.config.api_key.as_str()),
        ];
        let response = self
            .http
            .get(&self.config.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Request { provider: PROVIDER, message: e.to_string() })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Request { provider: PROVIDER, message: e.to_string() })?;

        if !(200..300).contains(&status) {
            tracing::warn!(status, "serpapi returned non-success status");
            return Err(ProviderError::Status { provider: PROVIDER, status, body: text });
        }

        let listings = parse_shopping_response(&text)?;
        tracing::debug!(query, listings = listings.len(), "serpapi search complete");
        Ok(listings)
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Deserialize)]
struct ShoppingResponse {
    #[serde(default)]
    shopping_results: Vec<ShoppingItem>,
}

#[derive(Deserialize)]
struct ShoppingItem {
    title: Option<String>,
    price: Option<Value>,
    source: Option<String>,
    link: Option<String>,
    product_link: Option<String>,
    merchant_link: Option<String>,
}

/// Parse a Google Shopping response body into priced listings.
///
/// A body without `shopping_results` yields no listings.
///
/// # Errors
///
/// Returns [`ProviderError::Parse`] if the body is not a JSON object of the
/// expected shape.
pub fn parse_shopping_response(body: &str) -> Result<Vec<Listing>, ProviderError> {
    let response: ShoppingResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse { provider: PROVIDER, message: e.to_string() })?;

    Ok(response
        .shopping_results
        .into_iter()
        .filter_map(listing_from_item)
        .collect())
}

fn listing_from_item(item: ShoppingItem) -> Option<Listing> {
    let price = match item.price.as_ref()? {
        Value::String(raw) => parse_price(raw)?,
        Value::Number(n) => n.as_f64().filter(|p| p.is_finite() && *p >= 0.0)?,
        _ => return None,
    };
    let link = resolve_link(&item);
    Some(Listing {
        title: item.title.unwrap_or_default(),
        price,
        source: item.source.unwrap_or_default(),
        link,
    })
}

/// Parse a display price such as `₹1,29,900.00`.
///
/// Strips the rupee sign (including its mis-decoded form), thousands
/// separators, and whitespace. Returns `None` for anything else that does
/// not parse as a finite, non-negative number.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let mut cleaned = raw.to_owned();
    for sign in RUPEE_SIGNS {
        cleaned = cleaned.replace(sign, "");
    }
    cleaned.retain(|c| c != ',' && !c.is_whitespace());
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn resolve_link(item: &ShoppingItem) -> Option<String> {
    let direct = [&item.link, &item.product_link, &item.merchant_link]
        .into_iter()
        .flatten()
        .find(|l| !l.trim().is_empty())
        .cloned();
    if direct.is_some() {
        return direct;
    }
    item.title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .and_then(search_fallback_link)
}

/// Google search URL for a listing title.
#[must_use]
pub fn search_fallback_link(title: &str) -> Option<String> {
    Url::parse_with_params(SEARCH_FALLBACK_URL, &[("q", title)])
        .ok()
        .map(String::from)
}

#[cfg(test)]
#[path = "serpapi_test.rs"]
mod tests;
