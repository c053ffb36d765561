//! Trunk binary entry; mounts the app when built for the browser.

fn main() {
    #[cfg(feature = "csr")]
    folio::mount();
}
