//! Scroll-triggered reveal: a one-way `visible` mark on viewport entry.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";

/// Observe every reveal target. Elements keep the `visible` class once they
/// have entered the viewport; there is no reverse transition on exit.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    // Fire at 10% visibility, with the viewport's bottom edge pulled up so
    // elements reveal slightly before they would naturally scroll in.
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -100px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in super::dom::elements(document.query_selector_all(REVEAL_SELECTOR)?) {
        observer.observe(&el);
    }
    Ok(())
}
