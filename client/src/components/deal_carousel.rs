//! Horizontally scrollable results container with its scroll hint.
//!
//! DESIGN
//! ======
//! Cards are derived from [`SearchState`] through `util::deal_cards`, so this
//! component only handles layout, the hint, and scroll position. The hint
//! hides on the first scroll once each search's results are rendered.

use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::state::search::SearchState;
use crate::util::deal_cards::deal_cards;

/// Results carousel. Hidden until the first search is issued.
#[component]
pub fn DealCarousel() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let carousel_ref = NodeRef::<leptos::html::Div>::new();

    // Changes only when a new response is rendered, not on every state edit.
    let applied = Memo::new(move |_| search.with(|s| s.applied));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if applied.get().is_none() {
            return;
        }
        if let Some(el) = carousel_ref.get_untracked() {
            scroll_to_start(&el);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = applied;

    let on_scroll = move |_| {
        if search.with_untracked(SearchState::can_dismiss_scroll_hint) {
            search.update(|s| {
                s.dismiss_scroll_hint();
            });
        }
    };

    let cards = move || search.with(|s| deal_cards(&s.results));

    view! {
        <p
            id="scrollHint"
            class="scroll-hint"
            class:hidden=move || !search.with(|s| s.scroll_hint_visible)
        >
            "Swipe or scroll sideways to see more deals →"
        </p>
        <div
            id="carousel"
            class="carousel"
            class:hidden=move || !search.with(|s| s.carousel_visible)
            node_ref=carousel_ref
            on:scroll=on_scroll
        >
            <Show when=move || search.with(SearchState::is_loading)>
                <p class="carousel__status">"Searching…"</p>
            </Show>
            {move || {
                search
                    .with(|s| s.error().map(str::to_owned))
                    .map(|message| view! { <p class="carousel__error">{message}</p> })
            }}
            {move || cards().into_iter().map(|card| view! { <DealCard card=card/> }).collect_view()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to_start(el: &web_sys::HtmlDivElement) {
    let options = web_sys::ScrollToOptions::new();
    options.set_left(0.0);
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&options);
}
