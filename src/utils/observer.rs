//! Viewport visibility observation via `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reports visibility transitions of observed elements.
///
/// The underlying observer is disconnected on drop, so owning this value is
/// owning the observation.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl VisibilityObserver {
    /// Create an observer that calls `on_change(element, is_visible)` for
    /// every transition. `root_margin` widens the viewport (CSS margin syntax)
    /// so elements count as visible slightly before they scroll in.
    pub fn new(
        root_margin: &str,
        mut on_change: impl FnMut(Element, bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: EntryCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.target(), entry.is_intersecting());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
