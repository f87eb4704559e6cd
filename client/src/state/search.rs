//! Search query and results state for the comparison page.
//!
//! DESIGN
//! ======
//! Each search is issued with a [`RequestToken`] taken from a monotonically
//! increasing counter. A response is applied only when its token is still the
//! latest issued, so a slow earlier response cannot overwrite newer results.
//! The network call itself lives in `pages::compare`; this module is pure.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::ComparisonGroup;

/// Identity of one issued search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// A search ready to send: the trimmed query and its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: String,
}

/// Lifecycle of the results container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Query input, results, and carousel visibility.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Raw input value, untrimmed.
    pub query: String,
    pub results: Vec<ComparisonGroup>,
    pub status: SearchStatus,
    /// The carousel stays hidden until the first search is issued.
    pub carousel_visible: bool,
    pub scroll_hint_visible: bool,
    /// Token of the response currently rendered.
    pub applied: Option<RequestToken>,
    latest: RequestToken,
}

impl SearchState {
    /// Replace the raw query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` without touching any state when the trimmed query is
    /// empty. Otherwise clears results, shows the carousel and scroll hint,
    /// and issues a new token.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_owned();

        self.latest = RequestToken(self.latest.0 + 1);
        self.results.clear();
        self.status = SearchStatus::Loading;
        self.carousel_visible = true;
        self.scroll_hint_visible = true;

        Some(SearchRequest { token: self.latest, query })
    }

    /// Fill the query with `text` and search for it.
    pub fn quick_search(&mut self, text: &str) -> Option<SearchRequest> {
        self.set_query(text);
        self.begin_search()
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// Returns `false` and leaves state unchanged when a newer search has
    /// been issued since.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<Vec<ComparisonGroup>, String>) -> bool {
        if token != self.latest {
            return false;
        }
        match outcome {
            Ok(groups) => {
                self.results = groups;
                self.status = SearchStatus::Ready;
            }
            Err(message) => {
                self.results.clear();
                self.status = SearchStatus::Failed(message);
            }
        }
        self.applied = Some(token);
        true
    }

    /// Hide the scroll hint. Returns `true` only on the first call after the
    /// latest response is rendered so callers can skip redundant updates.
    ///
    /// Scroll events fired while a search is in flight (the old cards being
    /// cleared, or the reset to the start) leave the hint visible.
    pub fn dismiss_scroll_hint(&mut self) -> bool {
        if !self.can_dismiss_scroll_hint() {
            return false;
        }
        self.scroll_hint_visible = false;
        true
    }

    /// Whether a scroll now would hide the hint: it is showing and the
    /// latest response has been rendered.
    #[must_use]
    pub fn can_dismiss_scroll_hint(&self) -> bool {
        self.scroll_hint_visible && self.applied == Some(self.latest)
    }

    /// Token of the most recently issued search.
    #[must_use]
    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
