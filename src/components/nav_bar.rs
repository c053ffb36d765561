//! Section navigation with scroll-tracked highlighting.

use leptos::prelude::*;

use crate::state::sections::{ACTIVE_CLASS, SectionId};

/// Fragment links to the four page sections.
///
/// Exactly one link carries the active class at any time, driven by the
/// shared active-section signal the intersection observer updates.
#[component]
pub fn NavBar() -> impl IntoView {
    let active = expect_context::<RwSignal<SectionId>>();

    view! {
        <nav class="site-nav">
            {SectionId::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <a
                            href=format!("#{}", section.as_str())
                            class="nav-link"
                            class=(ACTIVE_CLASS, move || active.get() == section)
                        >
                            {section.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
