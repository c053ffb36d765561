//! Intersection-observer wiring for reveal animation and nav highlighting.
//!
//! DESIGN
//! ======
//! Both observers are installed once at mount and live for the page; their
//! callback closures are intentionally leaked the way page-lifetime
//! listeners are elsewhere in this crate. The decision logic stays in
//! `state::reveal` / `state::sections`; this module only shuttles DOM values
//! in and out.

use leptos::prelude::RwSignal;

use crate::state::sections::{self, SectionId};

#[cfg(feature = "csr")]
use crate::state::reveal;

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

/// Observe every reveal-marked element and transition each into view once.
///
/// On first intersection an element gets its stagger delay and the revealed
/// class, then is unobserved; it is never processed again even if it leaves
/// and re-enters the viewport. Elements that never intersect stay pending.
pub fn install_reveal_observer() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue, closure::Closure};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(elements) = document.query_selector_all(&format!(".{}", reveal::MARKER_CLASS))
        else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(html) = target.dyn_ref::<web_sys::HtmlElement>() {
                        let index = reveal::parse_delay_index(
                            html.dataset().get(reveal::DELAY_DATASET_KEY).as_deref(),
                        );
                        let _ = html
                            .style()
                            .set_property("transition-delay", &reveal::transition_delay(index));
                    }
                    let _ = target.class_list().add_1(reveal::REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal::THRESHOLD));
        options.set_root_margin(reveal::ROOT_MARGIN);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        callback.forget();

        for i in 0..elements.length() {
            if let Some(element) = elements.get(i).and_then(|node| node.dyn_into().ok()) {
                observer.observe(&element);
            }
        }
    }
}

/// Observe the four page sections and keep `active` on the most visible one.
///
/// Sections missing from the document are skipped. Callback batches with no
/// intersecting section leave the signal untouched, so the previous
/// highlight survives fast scrolls through empty gaps.
pub fn install_section_observer(active: RwSignal<SectionId>) {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::Set;
        use wasm_bindgen::{JsCast, closure::Closure};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        use crate::state::sections::SectionReport;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let reports: Vec<SectionReport> = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .filter(IntersectionObserverEntry::is_intersecting)
                    .filter_map(|entry| {
                        let id = SectionId::from_fragment(&entry.target().id())?;
                        Some(SectionReport {
                            id,
                            ratio: entry.intersection_ratio(),
                        })
                    })
                    .collect();
                if let Some(id) = sections::select_active(&reports) {
                    active.set(id);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let thresholds = js_sys::Array::new();
        for threshold in sections::THRESHOLDS {
            thresholds.push(&threshold.into());
        }
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds.into());

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };
        callback.forget();

        for section in SectionId::ALL {
            if let Some(element) = document.get_element_by_id(section.as_str()) {
                observer.observe(&element);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = active;
    }
}
