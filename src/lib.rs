//! # folio
//!
//! Personal résumé page built as a Leptos + WASM client. The page is fully
//! static; the crate implements its three presentation behaviors:
//!
//! - persisted dark/light theme with system-preference fallback,
//! - one-shot reveal animation for elements scrolling into view,
//! - navigation-link highlighting tracking the most visible section.
//!
//! Decision logic lives in [`state`] as plain testable functions; [`util`]
//! holds the `csr`-gated web-sys glue; [`components`] and [`app`] are the
//! Leptos view layer over the [`content`] model.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

/// Mount the application onto `<body>`. Browser builds only.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting folio");
    leptos::mount::mount_to_body(app::App);
}
