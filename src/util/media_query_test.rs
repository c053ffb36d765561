#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn subscribe_is_a_noop_without_a_browser() {
    let fired = Rc::new(Cell::new(false));
    let fired_in_callback = Rc::clone(&fired);
    subscribe_system_theme(move |_| fired_in_callback.set(true));
    assert!(!fired.get());
}
