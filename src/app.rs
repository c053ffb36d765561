//! Root application component, context providers, and startup wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::nav_bar::NavBar;
use crate::components::sections::PageSections;
use crate::components::theme_toggle::ThemeToggle;
use crate::content;
use crate::state::sections::SectionId;
use crate::state::theme::Theme;
use crate::util::{media_query, observe, theme_store};

/// Root application component.
///
/// Provides the profile, theme, and active-section contexts, renders the
/// page, and wires the three behaviors on mount: theme resolution with
/// system-change subscription, the reveal observer, and the section
/// observer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile = RwSignal::new(content::profile());
    let theme = RwSignal::new(Theme::Light);
    // Summary is highlighted before any observation happens.
    let active = RwSignal::new(SectionId::Summary);

    provide_context(profile);
    provide_context(theme);
    provide_context(active);

    // One-time mount wiring; reads no signals, so it never re-runs.
    Effect::new(move || {
        theme.set(Theme::resolve_initial(
            theme_store::read_saved(),
            theme_store::system_prefers_dark(),
        ));
        media_query::subscribe_system_theme(move |system_dark| {
            // An explicit saved choice permanently overrides system changes.
            if theme_store::read_saved().is_none() {
                theme.set(Theme::from_system(system_dark));
            }
        });
        observe::install_reveal_observer();
        observe::install_section_observer(active);
    });

    // Mirror the theme signal onto the document element.
    Effect::new(move || theme_store::apply(theme.get()));

    let page_title = move || {
        let profile = profile.get();
        format!("{} — {}", profile.name, profile.title)
    };

    view! {
        <Title text=page_title/>

        <div class="page">
            <header class="page-header">
                <div class="page-header__identity">
                    <h1 class="page-header__name">{move || profile.get().name}</h1>
                    <p class="page-header__role">{move || profile.get().title}</p>
                    <p class="page-header__tagline">{move || profile.get().tagline}</p>
                </div>
                <div class="page-header__controls">
                    <NavBar/>
                    <ThemeToggle/>
                </div>
            </header>
            <main class="page-main">
                <PageSections/>
            </main>
            <footer class="page-footer">
                <p class="page-footer__note">{move || profile.get().name}</p>
            </footer>
        </div>
    }
}
