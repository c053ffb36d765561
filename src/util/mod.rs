//! Browser glue isolated from components and state logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules own all web-sys access. Bodies are gated on the `csr`
//! feature with callable no-op fallbacks, so every caller and the native
//! test build compile without browser bindings.

pub mod media_query;
pub mod observe;
pub mod theme_store;
