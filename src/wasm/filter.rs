//! Project gallery filter: exclusive-active filter buttons and a timed
//! two-phase show/hide transition per item.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::dom;
use crate::filter;

/// Delay before a shown item starts its fade-in, so the display change has
/// taken effect when the transition runs.
pub const SHOW_DELAY_MS: u32 = 10;
/// How long a hidden item keeps fading before it is removed from layout.
pub const HIDE_DELAY_MS: u32 = 300;

/// Bind a click handler to every filter control; zero controls is a no-op.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let buttons = Rc::new(dom::elements(document.query_selector_all(".filter-btn")?));
    if buttons.is_empty() {
        return Ok(());
    }
    let items = Rc::new(dom::elements(document.query_selector_all(".folio-item")?));

    for btn in buttons.iter() {
        let btn_c = btn.clone();
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        let closure = Closure::wrap(Box::new(move || {
            let selection = btn_c
                .get_attribute("data-filter")
                .unwrap_or_else(|| filter::WILDCARD.to_string());
            for other in buttons.iter() {
                let _ = other.class_list().remove_1("active");
            }
            let _ = btn_c.class_list().add_1("active");
            apply(&selection, &items);
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Show matching items and fade out the rest. Each item transitions through
/// its own timers; ordering is only consistent per item.
pub fn apply(selection: &str, items: &[Element]) {
    for item in items {
        let Some(container) = item.closest(".column").ok().flatten() else {
            continue;
        };
        let Ok(container) = container.dyn_into::<HtmlElement>() else {
            continue;
        };
        let category = item.get_attribute("data-category");
        if filter::matches(selection, category.as_deref()) {
            show(container);
        } else {
            hide(container);
        }
    }
}

fn show(container: HtmlElement) {
    let _ = container.style().set_property("display", "block");
    Timeout::new(SHOW_DELAY_MS, move || {
        let style = container.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "scale(1)");
    })
    .forget();
}

fn hide(container: HtmlElement) {
    let style = container.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "scale(0.8)");
    Timeout::new(HIDE_DELAY_MS, move || {
        let _ = container.style().set_property("display", "none");
    })
    .forget();
}
