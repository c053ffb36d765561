//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme_store;

/// Toggle button for the page theme.
///
/// Caption, pressed state, and accessible label all derive from the shared
/// theme signal. A click flips whatever the live document currently shows
/// (not a cached value), applies it through the signal, and persists it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| {
        let next = theme_store::applied()
            .unwrap_or_else(|| theme.get_untracked())
            .toggled();
        theme.set(next);
        theme_store::save(next);
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            on:click=on_click
            aria-pressed=move || theme.get().is_dark().to_string()
            aria-label=move || theme.get().toggle_aria_label()
        >
            {move || theme.get().toggle_text()}
        </button>
    }
}
