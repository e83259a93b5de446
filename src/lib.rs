#![cfg(target_arch = "wasm32")]
//! Browser front-end: binds `motion_core` to the DOM, WebAudio, GSAP and Lenis.
use wasm_bindgen::prelude::*;

mod animator;
mod audio;
mod constants;
mod context;
mod dom;
mod events;
mod frame;
mod hero;
mod scroll;
mod scroller;
mod startup;
mod styles;
mod visuals;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nextgen-motion starting");
    startup::boot();
    Ok(())
}

