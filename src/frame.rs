use motion_core::PulseScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rendering pulses from `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl PulseScheduler for RafScheduler {
    fn request_pulse(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = web::window() else {
            callback();
            return;
        };
        let tick = Closure::once_into_js(move |_ts: f64| callback());
        if let Err(e) = window.request_animation_frame(tick.unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Wall clock in milliseconds for the time-based limiters.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

/// One-shot `setTimeout`; returns the handle for `clearTimeout`.
pub fn after_ms(delay_ms: i32, callback: Box<dyn FnOnce()>) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(move || callback());
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .map_err(|e| log::error!("setTimeout error: {:?}", e))
        .ok()
}

pub fn cancel(handle: i32) {
    if let Some(window) = web::window() {
        window.clear_timeout_with_handle(handle);
    }
}
