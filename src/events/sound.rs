use js_sys::{Array, Reflect};
use motion_core::constants::{HAPTIC_CONFIRM_PATTERN_MS, HAPTIC_TAP_MS};
use motion_core::ToneCue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::audio;
use crate::constants::{
    CLICK_SOUND_TARGETS, CONFIRM_HAPTIC_TARGET, HOVER_SOUND_TARGETS, TAP_HAPTIC_TARGETS,
};
use crate::dom;

pub fn wire_sounds(document: &web::Document) {
    for el in dom::query_all(document, HOVER_SOUND_TARGETS) {
        dom::listen(&el, "mouseenter", |_: web::MouseEvent| audio::play(ToneCue::Hover));
    }
    for el in dom::query_all(document, CLICK_SOUND_TARGETS) {
        dom::listen(&el, "click", |_: web::MouseEvent| audio::play(ToneCue::Click));
    }

    // The page's result reveal calls `window.playSuccessSound()`.
    if let Some(window) = web::window() {
        let success = Closure::wrap(Box::new(|| audio::play(ToneCue::Success)) as Box<dyn FnMut()>);
        _ = Reflect::set(
            &window,
            &JsValue::from_str("playSuccessSound"),
            success.as_ref(),
        );
        success.forget();
    }
}

/// Vibration feedback where the platform supports it.
pub fn wire_haptics(document: &web::Document) -> bool {
    let Some(navigator) = web::window().map(|w| w.navigator()) else {
        return false;
    };
    if !Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
        return false;
    }
    for el in dom::query_all(document, TAP_HAPTIC_TARGETS) {
        let nav = navigator.clone();
        dom::listen(&el, "click", move |_: web::MouseEvent| {
            nav.vibrate_with_duration(HAPTIC_TAP_MS);
        });
    }
    if let Some(btn) = dom::query(document, CONFIRM_HAPTIC_TARGET) {
        let pattern: Array = HAPTIC_CONFIRM_PATTERN_MS
            .iter()
            .map(|&ms| JsValue::from(ms))
            .collect();
        dom::listen(&btn, "click", move |_: web::MouseEvent| {
            navigator.vibrate_with_pattern(&pattern);
        });
    }
    true
}
