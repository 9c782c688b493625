//! Smooth scrolling for in-page anchor links.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Intercept clicks on every in-page anchor. Placeholder hrefs (`#`, `#0`)
/// and missing targets fall through to native navigation.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for anchor in super::dom::elements(document.query_selector_all("a[href^='#']")?) {
        let anchor_c = anchor.clone();
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(href) = anchor_c.get_attribute("href") else {
                return;
            };
            if href == "#" || href == "#0" {
                return;
            }
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
