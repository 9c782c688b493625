//! Dark/light theme controller, persisted via `localStorage`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Window};

/// Key used to persist the theme preference in `localStorage`.
pub const STORAGE_KEY: &str = "portfolio-theme";
/// Attribute on the document root that carries the active theme.
pub const THEME_ATTR: &str = "data-theme";
/// Event dispatched on the window after every toggle.
pub const THEME_EVENT: &str = "theme-changed";

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// Apply the stored preference and bind the toggle control if present.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let theme = stored_theme(window);
    apply_theme(document, &theme);

    if let Some(btn) = document.query_selector(".theme-toggle")? {
        let window = window.clone();
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = toggle(&window, &document);
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Flip the theme, persist it, and broadcast the change. Root attribute,
/// stored value, and broadcast always agree once this returns.
pub fn toggle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let next = if current_theme(document) == DARK { LIGHT } else { DARK };
    apply_theme(document, next);
    save_theme(window, next);
    broadcast(window, next)
}

/// Active theme as carried by the root attribute, defaulting to light.
pub fn current_theme(document: &Document) -> String {
    document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR))
        .unwrap_or_else(|| LIGHT.to_string())
}

/// Read the stored theme from `localStorage`, defaulting to `"light"`.
fn stored_theme(window: &Window) -> String {
    window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| LIGHT.to_string())
}

fn apply_theme(document: &Document, theme: &str) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTR, theme);
    }
}

fn save_theme(window: &Window, theme: &str) {
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme);
    }
}

/// Notify other modules, carrying the new theme in the event detail.
fn broadcast(window: &Window, theme: &str) -> Result<(), JsValue> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &"theme".into(), &theme.into())?;
    let event_init = CustomEventInit::new();
    event_init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(THEME_EVENT, &event_init)?;
    window.dispatch_event(&event)?;
    Ok(())
}
