pub mod filter;
pub mod particles;
pub mod typing;

// The DOM layer only compiles when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod dom;
    pub mod filter;
    pub mod lazy;
    pub mod particles;
    pub mod reveal;
    pub mod scroll;
    pub mod theme;
    pub mod typing;

    /// Page-ready entry point: wire up every enhancement in a fixed order.
    /// Each module queries the document for its own markup and no-ops when
    /// the markup is absent, so a partial page degrades per-module.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        theme::init(&window, &document)?;
        filter::init(&document)?;
        typing::init(&document)?;
        reveal::init(&document)?;
        scroll::init(&document)?;
        lazy::init(&window, &document)?;
        particles::init(&window, &document)?;

        log::info!("portfolio enhancements loaded");
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
