use anyhow::{anyhow, bail};
use glam::Vec2;
use motion_core::{cursor_position, Animator, CursorState, FrameThrottle, InteractionRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{
    CURSOR_CLASS, CURSOR_HOVER_CLASS, CURSOR_INNER_HTML, CURSOR_PRESSED_CLASS, INTERACTIVE_TARGETS,
};
use crate::context::EffectContext;
use crate::dom;
use crate::frame::RafScheduler;
use crate::styles;

fn sync_classes(cursor: &web::Element, state: CursorState) {
    let cl = cursor.class_list();
    _ = cl.toggle_with_force(CURSOR_HOVER_CLASS, state.hover);
    _ = cl.toggle_with_force(CURSOR_PRESSED_CLASS, state.clicking);
}

/// Synthetic cursor following the pointer; hides the native one for the session.
/// Returns `Ok(false)` on narrow layouts.
pub fn wire_cursor(ctx: &EffectContext) -> anyhow::Result<bool> {
    if !ctx.cfg.pointer_effects_enabled(dom::viewport_width()) {
        return Ok(false);
    }
    let cursor = dom::create_div(&ctx.document, CURSOR_CLASS)
        .ok_or_else(|| anyhow!("cannot create cursor element"))?;
    cursor.set_inner_html(CURSOR_INNER_HTML);
    if !dom::append_to_body(&ctx.document, &cursor) {
        bail!("document has no <body>");
    }
    dom::inject_style(&ctx.document, styles::CURSOR_CSS);

    let follow = {
        let animator = ctx.animator.clone();
        let target: JsValue = cursor.clone().into();
        FrameThrottle::new(RafScheduler, move |p: Vec2| {
            animator.set_immediate(&target, &cursor_position(p));
        })
    };
    dom::listen(&ctx.document, "mousemove", move |ev: web::MouseEvent| {
        follow.guard(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });

    let registry = Rc::new(RefCell::new(InteractionRegistry::new()));
    for el in dom::query_all(&ctx.document, INTERACTIVE_TARGETS) {
        let id = registry.borrow_mut().register();
        let (reg, cur) = (registry.clone(), cursor.clone());
        dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
            let state = {
                let mut r = reg.borrow_mut();
                r.enter(id);
                r.cursor()
            };
            sync_classes(&cur, state);
        });
        let (reg, cur) = (registry.clone(), cursor.clone());
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            let state = {
                let mut r = reg.borrow_mut();
                r.leave(id);
                r.cursor()
            };
            sync_classes(&cur, state);
        });
    }

    for (event, down) in [("mousedown", true), ("mouseup", false)] {
        let (reg, cur) = (registry.clone(), cursor.clone());
        dom::listen(&ctx.document, event, move |_: web::MouseEvent| {
            let state = {
                let mut r = reg.borrow_mut();
                r.set_pointer_down(down);
                r.cursor()
            };
            sync_classes(&cur, state);
        });
    }
    Ok(true)
}
