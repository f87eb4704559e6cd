//! Header button that flips the light/dark theme.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::LocalStorage;
use crate::util::theme;

/// Theme toggle button. Persists each change to `localStorage`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = ui.get_untracked().theme;
                let next = theme::toggle(current, &LocalStorage);
                ui.update(|u| u.theme = next);
            }
            title="Toggle dark mode"
        >
            {move || if ui.get().dark_mode() { "☀" } else { "☾" }}
        </button>
    }
}
