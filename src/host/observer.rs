use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::error::HostError;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One intersection observer watching one element. Dropping the subscription
/// disconnects the observer.
pub struct VisibilitySubscription {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilitySubscription {
    /// Calls `on_ratio` with the element's visible ratio whenever it crosses
    /// `threshold` in either direction. Delivery order across elements is up
    /// to the browser.
    pub fn observe<F>(element: &Element, threshold: f64, mut on_ratio: F) -> Result<Self, HostError>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_ratio(entry.intersection_ratio());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
