#![cfg(not(feature = "csr"))]

use leptos::prelude::GetUntracked;

use super::*;

#[test]
fn reveal_install_is_a_noop_without_a_browser() {
    install_reveal_observer();
}

#[test]
fn section_install_leaves_the_signal_untouched() {
    let active = RwSignal::new(SectionId::Summary);
    install_section_observer(active);
    assert_eq!(active.get_untracked(), SectionId::Summary);
}
