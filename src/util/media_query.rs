//! System color-scheme change subscription.
//!
//! Registers a change listener on the `prefers-color-scheme` media query,
//! preferring the standard `addEventListener` form and falling back to the
//! legacy `addListener` API still required by older WebKit builds.

#[cfg(test)]
#[path = "media_query_test.rs"]
mod media_query_test;

/// Subscribe to system color-scheme changes for the lifetime of the page.
///
/// `on_change` receives `true` when the system switched to a dark
/// preference. The listener is never unregistered: the page owns exactly one
/// subscription and it dies with the document, so the callback closure is
/// intentionally leaked.
pub fn subscribe_system_theme(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            return;
        };

        let callback = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

        let registered = query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .or_else(|_| query.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref())));

        if registered.is_ok() {
            // Page-lifetime listener; dropping the closure would detach it.
            callback.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
