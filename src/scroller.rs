//! Lenis smooth scroll bridged to the animator's ticker and scroll triggers.

use anyhow::anyhow;
use js_sys::{Array, Function, Object, Reflect};
use motion_core::scroll::{scroller_ease, ScrollerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::animator::{call_method, global, GsapAnimator};
use crate::constants::{SCROLLER_GLOBAL, SCROLL_PLUGIN_GLOBAL};

fn options_object(opts: &ScrollerOptions) -> Object {
    let obj = Object::new();
    let set = |k: &str, v: &JsValue| {
        _ = Reflect::set(&obj, &JsValue::from_str(k), v);
    };
    set("duration", &JsValue::from_f64(opts.duration));
    set("orientation", &JsValue::from_str(opts.orientation.as_str()));
    set(
        "gestureOrientation",
        &JsValue::from_str(opts.gesture_orientation.as_str()),
    );
    set("smoothWheel", &JsValue::from_bool(opts.smooth_wheel));
    set("wheelMultiplier", &JsValue::from_f64(opts.wheel_multiplier));
    set("touchMultiplier", &JsValue::from_f64(opts.touch_multiplier));
    let ease = Closure::wrap(Box::new(scroller_ease) as Box<dyn Fn(f64) -> f64>);
    set("easing", ease.as_ref());
    ease.forget();
    obj
}

/// Construct the scroller and wire it both ways:
/// scroller `scroll` -> one `ScrollTrigger.update()`, animator tick -> `lenis.raf(ms)`.
/// `Ok(false)` when no scroller is loaded; native scrolling still drives the triggers.
pub fn connect(animator: &GsapAnimator, opts: &ScrollerOptions) -> anyhow::Result<bool> {
    let Some(ctor) = global(SCROLLER_GLOBAL) else {
        return Ok(false);
    };
    let ctor = ctor
        .dyn_into::<Function>()
        .map_err(|_| anyhow!("Lenis is not a constructor"))?;
    let lenis = Reflect::construct(&ctor, &Array::of1(&options_object(opts)))
        .map_err(|e| anyhow!("{:?}", e))?;

    let triggers =
        global(SCROLL_PLUGIN_GLOBAL).ok_or_else(|| anyhow!("ScrollTrigger not loaded"))?;
    let on_scroll = Closure::wrap(Box::new(move || {
        if let Err(e) = call_method(&triggers, "update", &Array::new()) {
            log::debug!("[scroller] trigger update failed: {}", e);
        }
    }) as Box<dyn FnMut()>);
    call_method(
        &lenis,
        "on",
        &Array::of2(&JsValue::from_str("scroll"), on_scroll.as_ref()),
    )?;
    on_scroll.forget();

    let ticker = animator.ticker()?;
    let lenis_tick = lenis.clone();
    let on_tick = Closure::wrap(Box::new(move |time_sec: f64| {
        _ = call_method(
            &lenis_tick,
            "raf",
            &Array::of1(&JsValue::from_f64(time_sec * 1000.0)),
        );
    }) as Box<dyn FnMut(f64)>);
    call_method(&ticker, "add", &Array::of1(on_tick.as_ref()))?;
    on_tick.forget();
    call_method(&ticker, "lagSmoothing", &Array::of1(&JsValue::from_f64(0.0)))?;
    Ok(true)
}
