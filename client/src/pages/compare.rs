//! Comparison page: theme toggle, search bar, and the deal carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It turns search intents into requests: the
//! shared [`SearchState`] issues a token, the fetch runs on the local
//! executor, and the response is applied only if its token is still current.

use leptos::prelude::*;

use crate::components::deal_carousel::DealCarousel;
use crate::components::search_bar::SearchBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::search::{SearchRequest, SearchState};

/// Price comparison page.
#[component]
pub fn ComparePage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_search = Callback::new(move |()| {
        // Blank queries must not notify subscribers or clear results.
        if search.with_untracked(|s| s.query.trim().is_empty()) {
            return;
        }
        let mut request = None;
        search.update(|s| request = s.begin_search());
        if let Some(request) = request {
            run_search(search, request);
        }
    });

    let on_quick_search = Callback::new(move |text: String| {
        focus_input(input_ref);
        let mut request = None;
        search.update(|s| request = s.quick_search(&text));
        if let Some(request) = request {
            run_search(search, request);
        }
    });

    view! {
        <div class="compare-page">
            <header class="compare-page__header">
                <h1 class="compare-page__title">"DealDeck"</h1>
                <span class="compare-page__spacer"></span>
                <ThemeToggle/>
            </header>
            <section class="compare-page__search">
                <SearchBar input_ref=input_ref on_search=on_search on_quick_search=on_quick_search/>
            </section>
            <section class="compare-page__results">
                <DealCarousel/>
            </section>
        </div>
    }
}

/// Fetch results for `request` and apply them if still current.
fn run_search(search: RwSignal<SearchState>, request: SearchRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let SearchRequest { token, query } = request;
        log::debug!("compare request {token:?} query={query:?}");

        let outcome = crate::net::api::fetch_comparison(&query).await;
        match &outcome {
            Ok(groups) => log::debug!("compare response {token:?} groups={}", groups.len()),
            Err(e) => log::warn!("compare request {token:?} failed: {e}"),
        }

        let mut applied = false;
        search.update(|s| applied = s.complete(token, outcome));
        if !applied {
            log::debug!("discarded stale compare response {token:?}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, request);
    }
}

/// Focus the query input if it is mounted.
fn focus_input(input_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_ref;
    }
}
