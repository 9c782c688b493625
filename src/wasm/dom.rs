use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

/// Collect a query result into the elements it contains.
pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    out
}
