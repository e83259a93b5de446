//! GSAP binding behind the core `Animator` seam.
//!
//! GSAP is looked up on the global object at runtime rather than imported, so
//! a page that failed to load it degrades to "no effects" instead of a
//! link-time error.

use anyhow::anyhow;
use js_sys::{Array, Function, Object, Reflect};
use motion_core::{Animator, ScrollBinding, ScrollMode, Tween};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::constants::{ANIMATOR_GLOBAL, SCROLL_PLUGIN_GLOBAL};

/// A defined, non-null global by name.
pub fn global(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `target[method](...args)`.
pub fn call_method(target: &JsValue, method: &str, args: &Array) -> anyhow::Result<JsValue> {
    let f = Reflect::get(target, &JsValue::from_str(method))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<Function>()
        .map_err(|_| anyhow!("`{}` is not a function", method))?;
    f.apply(target, args).map_err(|e| anyhow!("{:?}", e))
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn binding_vars(binding: &ScrollBinding) -> Object {
    let obj = Object::new();
    set(&obj, "trigger", &JsValue::from_str(&binding.trigger));
    set(&obj, "start", &JsValue::from_str(&binding.start));
    if let Some(end) = &binding.end {
        set(&obj, "end", &JsValue::from_str(end));
    }
    match &binding.mode {
        ScrollMode::Scrub(lag) => set(&obj, "scrub", &JsValue::from_f64(*lag)),
        ScrollMode::Toggle(actions) => {
            set(&obj, "toggleActions", &JsValue::from_str(&actions.to_string()))
        }
    }
    obj
}

/// Translate a tween descriptor into a GSAP vars object.
pub fn tween_vars(tween: &Tween) -> Object {
    let obj = Object::new();
    for (prop, value) in tween.props.iter() {
        set(&obj, prop.key(), &JsValue::from_f64(*value));
    }
    if let Some(d) = tween.duration {
        set(&obj, "duration", &JsValue::from_f64(d));
    }
    if let Some(e) = tween.ease {
        set(&obj, "ease", &JsValue::from_str(&e.to_string()));
    }
    if let Some(d) = tween.delay {
        set(&obj, "delay", &JsValue::from_f64(d));
    }
    if let Some(s) = tween.stagger {
        set(&obj, "stagger", &JsValue::from_f64(s));
    }
    if let Some(b) = &tween.scroll {
        set(&obj, "scrollTrigger", &binding_vars(b));
    }
    obj
}

pub struct GsapAnimator {
    gsap: JsValue,
}

impl GsapAnimator {
    pub fn detect() -> Option<Self> {
        global(ANIMATOR_GLOBAL).map(|gsap| Self { gsap })
    }

    /// `gsap.registerPlugin(ScrollTrigger)`; fails if the plugin is absent.
    pub fn register_scroll_plugin(&self) -> anyhow::Result<()> {
        let plugin =
            global(SCROLL_PLUGIN_GLOBAL).ok_or_else(|| anyhow!("ScrollTrigger not loaded"))?;
        call_method(&self.gsap, "registerPlugin", &Array::of1(&plugin))?;
        Ok(())
    }

    /// The animator's own per-frame ticker.
    pub fn ticker(&self) -> anyhow::Result<JsValue> {
        Reflect::get(&self.gsap, &JsValue::from_str("ticker")).map_err(|e| anyhow!("{:?}", e))
    }

    fn command(&self, method: &str, target: &JsValue, vars: &Object) {
        if let Err(e) = call_method(&self.gsap, method, &Array::of2(target, vars)) {
            log::debug!("[animator] gsap.{} failed: {}", method, e);
        }
    }
}

impl Animator for GsapAnimator {
    type Target = JsValue;

    fn select(&self, selector: &str) -> JsValue {
        JsValue::from_str(selector)
    }

    fn animate_from(&self, target: &JsValue, tween: &Tween) {
        self.command("from", target, &tween_vars(tween));
    }

    fn animate_to(&self, target: &JsValue, tween: &Tween) {
        self.command("to", target, &tween_vars(tween));
    }

    fn animate_to_then(&self, target: &JsValue, tween: &Tween, on_complete: Box<dyn FnOnce()>) {
        let vars = tween_vars(tween);
        let done = Closure::once_into_js(move || on_complete());
        set(&vars, "onComplete", &done);
        self.command("to", target, &vars);
    }

    fn set_immediate(&self, target: &JsValue, tween: &Tween) {
        self.command("set", target, &tween_vars(tween));
    }
}
