//! Scroll-reveal timing rules.
//!
//! Elements carrying the reveal marker stay hidden until they scroll into
//! view, then transition in once with a stagger delay derived from their
//! `data-delay` index. The transition is one-shot: once revealed, an element
//! is unobserved and never processed again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class marking an element for reveal-on-scroll.
pub const MARKER_CLASS: &str = "reveal";

/// Class added when an element has entered the viewport.
pub const REVEALED_CLASS: &str = "in-view";

/// Data attribute (dataset key) holding the stagger index.
pub const DELAY_DATASET_KEY: &str = "delay";

/// Stagger step between consecutive delay indices.
pub const STAGGER_STEP_MS: u32 = 80;

/// Fraction of an element that must be visible before it reveals.
pub const THRESHOLD: f64 = 0.2;

/// Bottom inset pulling the trigger line 40px into the viewport.
pub const ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Stagger delay for a delay index.
pub fn delay_ms(index: u32) -> u32 {
    index.saturating_mul(STAGGER_STEP_MS)
}

/// Parse a `data-delay` attribute value. Missing, empty, or non-numeric
/// values mean no stagger (index 0).
pub fn parse_delay_index(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

/// CSS `transition-delay` value for a delay index.
pub fn transition_delay(index: u32) -> String {
    format!("{}ms", delay_ms(index))
}
