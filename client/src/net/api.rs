//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since searches only run in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so transport, status and
//! decode failures surface as a visible error state on the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ComparisonGroup;

/// Path of the comparison endpoint.
pub const COMPARE_ENDPOINT: &str = "/compare";

#[cfg(any(test, feature = "hydrate"))]
fn compare_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!("compare request failed: {status} ({detail})"),
        None => format!("compare request failed: {status}"),
    }
}

/// Fetch comparison groups from `GET /compare?query=<query>`.
///
/// The query is URL-encoded by the request builder. Groups are returned in
/// response order.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-success status, or the body is not a JSON array of groups.
pub async fn fetch_comparison(query: &str) -> Result<Vec<ComparisonGroup>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COMPARE_ENDPOINT)
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = resp.json::<super::types::ErrorBody>().await.ok().map(|b| b.error);
            return Err(compare_failed_message(status, detail.as_deref()));
        }
        resp.json::<Vec<ComparisonGroup>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
