//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::compare::ComparePage;
use crate::state::{search::SearchState, ui::UiState};
use crate::util::storage::LocalStorage;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI and search state contexts, applies the stored theme once
/// mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let search = RwSignal::new(SearchState::default());

    provide_context(ui);
    provide_context(search);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let stored = theme::init(&LocalStorage);
        ui.update(|u| u.theme = stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dealdeck.css"/>
        <Title text="DealDeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ComparePage/>
            </Routes>
        </Router>
    }
}
