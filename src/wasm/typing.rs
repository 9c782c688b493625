//! Drives the typing reveal as a self-rescheduling timeout chain.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::typing::{Action, Step, TypingSequence};

/// Start the reveal on the single `.typing-text` target; no-op if absent.
/// The source text comes from `data-text` when present, else the element's
/// existing content. Runs exactly once per page load.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(el) = document.query_selector(".typing-text")? else {
        return Ok(());
    };
    let el: HtmlElement = el.dyn_into()?;

    let text = el
        .get_attribute("data-text")
        .unwrap_or_else(|| el.text_content().unwrap_or_default());
    el.set_text_content(Some(""));
    let _ = el.style().set_property("display", "inline-block");

    let mut seq = TypingSequence::new(&text);
    if let Some(step) = seq.step() {
        schedule(el, seq, step);
    }
    Ok(())
}

/// Run one step after its delay, then schedule the next. Each step is armed
/// only after the previous one has completed.
fn schedule(el: HtmlElement, mut seq: TypingSequence, step: Step) {
    Timeout::new(step.delay_ms, move || {
        match step.action {
            Action::Show(_) => el.set_text_content(Some(&seq.visible())),
            Action::ClearCursor => {
                let _ = el.style().set_property("border-right", "none");
            }
        }
        if let Some(next) = seq.step() {
            schedule(el, seq, next);
        }
    })
    .forget();
}
