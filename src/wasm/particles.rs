//! Decorative particle background on the full-viewport canvas.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, Window};

use super::theme;
use crate::particles::ParticleField;

/// Translucent dot colors, one per theme.
pub const LIGHT_COLOR: &str = "rgba(95, 146, 149, 0.3)";
pub const DARK_COLOR: &str = "rgba(111, 179, 184, 0.3)";

/// Start the particle loop on `#particles-canvas`; no-op if absent. Runs for
/// the life of the page; there is no stop or pause.
pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = document.get_element_by_id("particles-canvas") else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas context unavailable")?
        .dyn_into()?;

    fit_to_window(window, &canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        canvas.width() as f64,
        canvas.height() as f64,
        &mut js_sys::Math::random,
    )));

    // Re-fit on resize (which clears the surface) and draw a fresh
    // population sized for the new area.
    let resize_closure = {
        let window = window.clone();
        let canvas = canvas.clone();
        let field = Rc::clone(&field);
        Closure::wrap(Box::new(move || {
            fit_to_window(&window, &canvas);
            field.borrow_mut().resize(
                canvas.width() as f64,
                canvas.height() as f64,
                &mut js_sys::Math::random,
            );
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Theme switches clear the surface immediately; the next frame redraws
    // every particle in the new theme's color.
    let theme_closure = {
        let ctx = ctx.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |_event: Event| {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }) as Box<dyn FnMut(Event)>)
    };
    window.add_event_listener_with_callback(
        theme::THEME_EVENT,
        theme_closure.as_ref().unchecked_ref(),
    )?;
    theme_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let document = document.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, width, height);

        let mut field = field.borrow_mut();
        field.step();

        // Read the theme attribute fresh so a toggle shows up within a frame.
        let color = if theme::current_theme(&document) == theme::DARK {
            DARK_COLOR
        } else {
            LIGHT_COLOR
        };
        ctx.set_fill_style_str(color);
        for p in field.particles() {
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        // schedule next
        web_sys::window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
