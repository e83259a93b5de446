//! Magnetic buttons with click ripples, and the hero tilt.

use glam::Vec2;
use motion_core::{
    ElementId, FrameThrottle, InteractionRegistry, MagneticEffect, PointerSample, RippleSpec,
    TiltEffect,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{HERO, HERO_CONTENT, MAGNETIC_TARGETS, RIPPLE_CLASS};
use crate::context::EffectContext;
use crate::dom;
use crate::frame::RafScheduler;
use crate::styles;
use motion_core::constants::{RIPPLE_SIZE_PX, TILT_PERSPECTIVE_PX};

#[inline]
fn sample(ev: &web::MouseEvent, el: &web::Element) -> PointerSample {
    PointerSample {
        client: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        rect: dom::rect_of(el),
    }
}

pub fn wire_magnetic_buttons(ctx: &EffectContext) -> usize {
    let registry = Rc::new(RefCell::new(InteractionRegistry::new()));
    let magnet = MagneticEffect {
        strength: ctx.cfg.magnetic_strength,
    };
    let buttons = dom::query_all(&ctx.document, MAGNETIC_TARGETS);
    for btn in buttons.iter() {
        let id = registry.borrow_mut().register();
        let target: JsValue = btn.clone().into();

        let pull = {
            let animator = ctx.animator.clone();
            let registry = registry.clone();
            let target = target.clone();
            FrameThrottle::new(RafScheduler, move |s: PointerSample| {
                magnet.on_pulse(&registry.borrow(), id, &*animator, &target, &s);
            })
        };
        let btn_move = btn.clone();
        let reg = registry.clone();
        dom::listen(btn, "mousemove", move |ev: web::MouseEvent| {
            // mousemove can arrive without a prior mouseenter after a reload under the pointer
            reg.borrow_mut().enter(id);
            pull.guard(sample(&ev, &btn_move));
        });

        let reg = registry.clone();
        dom::listen(btn, "mouseenter", move |_: web::MouseEvent| {
            reg.borrow_mut().enter(id);
        });

        let reg = registry.clone();
        let animator = ctx.animator.clone();
        let target_leave = target.clone();
        dom::listen(btn, "mouseleave", move |_: web::MouseEvent| {
            reg.borrow_mut().leave(id);
            magnet.on_leave(&*animator, &target_leave);
        });

        let reg = registry.clone();
        let ctx_click = ctx.clone();
        let btn_click = btn.clone();
        dom::listen(btn, "click", move |ev: web::MouseEvent| {
            spawn_ripple(&ctx_click, &reg, id, &btn_click, &ev);
        });
    }
    buttons.len()
}

fn spawn_ripple(
    ctx: &EffectContext,
    registry: &Rc<RefCell<InteractionRegistry>>,
    id: ElementId,
    host: &web::Element,
    ev: &web::MouseEvent,
) {
    if registry.borrow_mut().claim_containment(id) {
        if dom::computed_position(host).as_deref() == Some("static") {
            dom::set_style(host, "position", "relative");
        }
        dom::set_style(host, "overflow", "hidden");
    }
    let spec = RippleSpec::at(
        &dom::rect_of(host),
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
    );
    let Ok(ripple) = ctx.document.create_element("span") else {
        return;
    };
    ripple.set_class_name(RIPPLE_CLASS);
    _ = ripple.set_attribute(
        "style",
        &styles::ripple_style(spec.left, spec.top, RIPPLE_SIZE_PX),
    );
    if host.append_child(&ripple).is_err() {
        return;
    }
    ctx.visuals
        .spawn(&ctx.animator, ripple, &RippleSpec::tween());
}

/// Tilt `.hero-content` with the pointer over `.hero`. Wide layouts only.
pub fn wire_hero_tilt(ctx: &EffectContext) -> bool {
    if !ctx.cfg.pointer_effects_enabled(dom::viewport_width()) {
        return false;
    }
    let (Some(hero), Some(content)) = (
        dom::query(&ctx.document, HERO),
        dom::query(&ctx.document, HERO_CONTENT),
    ) else {
        log::debug!("[tilt] hero not found");
        return false;
    };
    dom::set_style(&content, "transform-style", "preserve-3d");
    dom::set_style(&content, "perspective", &format!("{}px", TILT_PERSPECTIVE_PX));

    let surfaces = Rc::new(RefCell::new(InteractionRegistry::new()));
    let id = surfaces.borrow_mut().register();
    let tilt = TiltEffect {
        divisor: ctx.cfg.tilt_divisor,
    };
    let target: JsValue = content.into();

    let follow = {
        let animator = ctx.animator.clone();
        let surfaces = surfaces.clone();
        let target = target.clone();
        FrameThrottle::new(RafScheduler, move |s: PointerSample| {
            tilt.on_pulse(&surfaces.borrow(), id, &*animator, &target, &s);
        })
    };
    let hero_move = hero.clone();
    let reg = surfaces.clone();
    dom::listen(&hero, "mousemove", move |ev: web::MouseEvent| {
        reg.borrow_mut().enter(id);
        follow.guard(sample(&ev, &hero_move));
    });

    let reg = surfaces.clone();
    let animator = ctx.animator.clone();
    dom::listen(&hero, "mouseleave", move |_: web::MouseEvent| {
        reg.borrow_mut().leave(id);
        tilt.on_leave(&*animator, &target);
    });
    true
}
