//! Leptos view components for the page chrome and sections.

pub mod nav_bar;
pub mod sections;
pub mod theme_toggle;
