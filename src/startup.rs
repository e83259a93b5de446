//! Page side of the startup race: the `js-ready` marker observed on `<body>`,
//! a `setTimeout` fallback, and the effect wiring run by whichever wins.

use js_sys::Array;
use motion_core::scroll::ScrollerOptions;
use motion_core::startup::Collaborators;
use motion_core::{MotionConfig, StartupHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::animator::{self, GsapAnimator};
use crate::constants::{ANIMATOR_GLOBAL, READY_CLASS, REDUCED_MOTION_QUERY, SCROLL_PLUGIN_GLOBAL};
use crate::context::EffectContext;
use crate::visuals::VisualHost;
use crate::{dom, events, frame, hero, scroll, scroller, styles};

struct PageHost {
    document: web::Document,
    observer: RefCell<Option<web::MutationObserver>>,
}

impl PageHost {
    fn new(document: web::Document) -> Self {
        Self {
            document,
            observer: RefCell::new(None),
        }
    }
}

impl StartupHost for PageHost {
    type Timer = i32;

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(REDUCED_MOTION_QUERY)
    }

    fn marker_present(&self) -> bool {
        self.document
            .body()
            .map(|b| b.class_list().contains(READY_CLASS))
            .unwrap_or(false)
    }

    fn animator_present(&self) -> bool {
        animator::global(ANIMATOR_GLOBAL).is_some()
    }

    fn observe_marker(&self, on_change: Box<dyn Fn()>) {
        let Some(body) = self.document.body() else {
            log::debug!("[startup] no <body> to observe; waiting for the fallback");
            return;
        };
        let cb = Closure::wrap(Box::new(move |_: Array, _: web::MutationObserver| {
            on_change();
        }) as Box<dyn FnMut(Array, web::MutationObserver)>);
        let observer = match web::MutationObserver::new(cb.as_ref().unchecked_ref()) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[startup] MutationObserver unavailable: {:?}", e);
                return;
            }
        };
        cb.forget();
        let init = web::MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&Array::of1(&JsValue::from_str("class")));
        if let Err(e) = observer.observe_with_options(&body, &init) {
            log::warn!("[startup] observe failed: {:?}", e);
            return;
        }
        *self.observer.borrow_mut() = Some(observer);
    }

    fn disconnect_observer(&self) {
        let observer = self.observer.borrow_mut().take();
        if let Some(observer) = observer {
            observer.disconnect();
        }
    }

    fn start_timer(&self, delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> i32 {
        frame::after_ms(delay_ms as i32, on_fire).unwrap_or(0)
    }

    fn cancel_timer(&self, timer: i32) {
        frame::cancel(timer);
    }
}

/// Detect the collaborators and wire every effect. `false` aborts startup.
fn init_effects(document: web::Document, cfg: MotionConfig) -> bool {
    let found = Collaborators {
        animator: animator::global(ANIMATOR_GLOBAL).is_some(),
        scroll_plugin: animator::global(SCROLL_PLUGIN_GLOBAL).is_some(),
    };
    if let Err(e) = found.require() {
        log::warn!("[startup] {}; effects disabled", e);
        return false;
    }
    let Some(animator) = GsapAnimator::detect() else {
        return false;
    };
    if let Err(e) = animator.register_scroll_plugin() {
        log::warn!("[startup] {}; effects disabled", e);
        return false;
    }
    let animator = Rc::new(animator);
    match scroller::connect(&animator, &ScrollerOptions::default()) {
        Ok(true) => log::info!("[startup] smooth scroller connected"),
        Ok(false) => log::warn!("[startup] Lenis not loaded; using native scrolling"),
        Err(e) => log::warn!("[startup] scroller bridge failed: {}", e),
    }
    dom::inject_style(&document, styles::GLASS_CSS);

    let ctx = EffectContext {
        document,
        animator,
        cfg,
        visuals: VisualHost::new(),
    };
    let entrances = hero::wire_hero(&ctx);
    let magnetic = events::pointer::wire_magnetic_buttons(&ctx);
    let tilt = events::pointer::wire_hero_tilt(&ctx);
    let cursor = events::cursor::wire_cursor(&ctx).unwrap_or_else(|e| {
        log::warn!("[cursor] {}", e);
        false
    });
    let wheel = events::drag::wire_wheel(&ctx);
    let scroll_bound = scroll::wire_scroll(&ctx);
    events::sound::wire_sounds(&ctx.document);
    let haptics = events::sound::wire_haptics(&ctx.document);
    log::info!(
        "[startup] ready: entrances={} magnetic={} tilt={} cursor={} wheel={} scroll={} haptics={}",
        entrances,
        magnetic,
        tilt,
        cursor,
        wheel,
        scroll_bound,
        haptics
    );
    true
}

fn begin(document: web::Document) {
    let cfg = MotionConfig::default();
    let timeout_ms = cfg.ready_timeout_ms;
    let host = Rc::new(PageHost::new(document.clone()));
    let seq = motion_core::startup::start(host, timeout_ms, move || init_effects(document, cfg));
    log::info!("[startup] {:?}", seq.borrow().phase());
}

/// Entry from `start()`: run now, or after `DOMContentLoaded` while still loading.
pub fn boot() {
    let Some(document) = dom::window_document() else {
        log::warn!("[startup] no document");
        return;
    };
    if document.ready_state() != "loading" {
        begin(document);
        return;
    }
    let doc = document.clone();
    let on_loaded = Closure::once_into_js(move || begin(doc));
    _ = document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref());
}
