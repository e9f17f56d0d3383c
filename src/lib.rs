//! Procedural ribbon-of-triangles canvas background.
//!
//! The geometry and colour modules are target-independent so their properties
//! run under plain `cargo test`; everything that touches the DOM is gated to
//! wasm32.

pub mod color;
pub mod config;
pub mod ribbon;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("ribbon-bg loaded; construct a RibbonBackground to mount");
        Ok(())
    }
}
