//! Deferred image loading: swap `data-src` into `src` on viewport entry.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

/// Observe every image carrying a deferred source. Without the observer
/// capability, all deferred sources resolve eagerly at init time.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let images = super::dom::elements(document.query_selector_all("img[data-src]")?);
    if images.is_empty() {
        return Ok(());
    }

    let has_observer =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
    if !has_observer {
        for img in &images {
            resolve(img);
        }
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let img = entry.target();
                    resolve(&img);
                    observer.unobserve(&img);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for img in &images {
        observer.observe(img);
    }
    Ok(())
}

/// Move the deferred source into the live attribute and mark the image
/// loaded. Idempotent: the deferred attribute is gone after the first call.
pub fn resolve(img: &Element) {
    let Some(src) = img.get_attribute("data-src") else {
        return;
    };
    let _ = img.set_attribute("src", &src);
    let _ = img.remove_attribute("data-src");
    let _ = img.class_list().add_1("loaded");
}
