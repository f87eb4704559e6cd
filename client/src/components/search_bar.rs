//! Query input, search button, and quick-search suggestions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar only edits the query text and forwards intents; the page owns
//! issuing requests so token bookkeeping stays in one place.

use leptos::prelude::*;

use crate::state::search::SearchState;

/// Suggestions offered under the search box.
pub const QUICK_SEARCHES: &[&str] = &["iPhone 15", "iPhone 15 Pro", "iPhone 15 Pro Max 256GB", "iPhone 14 Plus"];

/// Search form bound to the shared [`SearchState`] query.
#[component]
pub fn SearchBar(
    input_ref: NodeRef<leptos::html::Input>,
    on_search: Callback<()>,
    on_quick_search: Callback<String>,
) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                id="query"
                class="search-bar__input"
                type="text"
                placeholder="Search a product, e.g. iPhone 15 128GB"
                autocomplete="off"
                node_ref=input_ref
                prop:value=move || search.with(|s| s.query.clone())
                on:input=move |ev| search.update(|s| s.set_query(event_target_value(&ev)))
            />
            <button class="btn search-bar__submit" type="submit">
                "Compare"
            </button>
        </form>
        <div class="quick-searches">
            {QUICK_SEARCHES
                .iter()
                .map(|text| {
                    let text = *text;
                    view! {
                        <button
                            class="chip"
                            type="button"
                            on:click=move |_| on_quick_search.run(text.to_owned())
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
