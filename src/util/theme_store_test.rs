#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_saved_is_none_without_a_browser() {
    assert_eq!(read_saved(), None);
}

#[test]
fn applied_is_none_without_a_browser() {
    assert_eq!(applied(), None);
}

#[test]
fn system_preference_defaults_to_light() {
    assert!(!system_prefers_dark());
}

#[test]
fn save_and_apply_are_noops_but_callable() {
    save(Theme::Dark);
    apply(Theme::Light);
}
