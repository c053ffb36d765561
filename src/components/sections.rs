//! The four résumé sections, with reveal-on-scroll markers.
//!
//! Section elements carry the ids the section observer watches; inner blocks
//! carry the `reveal` class and staggered `data-delay` indices the reveal
//! observer animates.

use leptos::prelude::*;

use crate::content::Profile;

/// All four page sections in document order.
#[component]
pub fn PageSections() -> impl IntoView {
    view! {
        <SummarySection/>
        <ExperienceSection/>
        <EducationSection/>
        <SkillsSection/>
    }
}

#[component]
fn SummarySection() -> impl IntoView {
    let profile = expect_context::<RwSignal<Profile>>();

    view! {
        <section id="summary" class="page-section">
            <h2 class="reveal">"Summary"</h2>
            {move || {
                profile
                    .get()
                    .summary
                    .into_iter()
                    .enumerate()
                    .map(|(i, paragraph)| {
                        view! {
                            <p class="reveal" data-delay=(i + 1).to_string()>
                                {paragraph}
                            </p>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    let profile = expect_context::<RwSignal<Profile>>();

    view! {
        <section id="experience" class="page-section">
            <h2 class="reveal">"Experience"</h2>
            {move || {
                profile
                    .get()
                    .experience
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <article class="reveal entry" data-delay=(i + 1).to_string()>
                                <header class="entry__header">
                                    <h3 class="entry__role">{entry.role}</h3>
                                    <span class="entry__company">{entry.company}</span>
                                    <span class="entry__period">{entry.period}</span>
                                </header>
                                <ul class="entry__highlights">
                                    {entry
                                        .highlights
                                        .into_iter()
                                        .map(|highlight| view! { <li>{highlight}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    let profile = expect_context::<RwSignal<Profile>>();

    view! {
        <section id="education" class="page-section">
            <h2 class="reveal">"Education"</h2>
            {move || {
                profile
                    .get()
                    .education
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <article class="reveal entry" data-delay=(i + 1).to_string()>
                                <h3 class="entry__role">{entry.degree}</h3>
                                <span class="entry__company">{entry.school}</span>
                                <span class="entry__period">{entry.period}</span>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let profile = expect_context::<RwSignal<Profile>>();

    view! {
        <section id="skills" class="page-section">
            <h2 class="reveal">"Skills"</h2>
            <div class="skills-grid">
                {move || {
                    profile
                        .get()
                        .skills
                        .into_iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <div class="reveal skill-group" data-delay=(i + 1).to_string()>
                                    <h3 class="skill-group__label">{group.label}</h3>
                                    <ul class="skill-group__items">
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|item| view! { <li>{item}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
