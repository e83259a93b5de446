use motion_core::entrance::wheel_rest;
use motion_core::{Animator, DragTrail, ParticleSpec};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{PARTICLE_CLASS, WHEEL_CONTAINER, WHEEL_WRAPPER};
use crate::context::EffectContext;
use crate::dom;
use crate::frame;
use crate::styles;
use motion_core::constants::{PARTICLE_SIZE_PX, WHEEL_PERSPECTIVE_PX};

fn emit_particle(ctx: &EffectContext, spec: &ParticleSpec) {
    let Some(particle) = dom::create_div(&ctx.document, PARTICLE_CLASS) else {
        return;
    };
    _ = particle.set_attribute(
        "style",
        &styles::particle_style(spec.x, spec.y, PARTICLE_SIZE_PX),
    );
    if dom::append_to_body(&ctx.document, &particle) {
        ctx.visuals.spawn(&ctx.animator, particle, &spec.tween());
    }
}

/// 3D wheel surface: resting tilt plus a particle trail while dragging.
pub fn wire_wheel(ctx: &EffectContext) -> bool {
    let Some(container) = dom::query(&ctx.document, WHEEL_CONTAINER) else {
        log::debug!("[wheel] {} not found", WHEEL_CONTAINER);
        return false;
    };
    dom::set_style(&container, "perspective", &format!("{}px", WHEEL_PERSPECTIVE_PX));
    dom::set_style(&container, "transform-style", "preserve-3d");
    if let Some(wrapper) = dom::query(&ctx.document, WHEEL_WRAPPER) {
        ctx.animator.set_immediate(&wrapper.into(), &wheel_rest());
    }

    let seed = ctx.cfg.seed ^ (js_sys::Math::random() * u32::MAX as f64) as u64;
    let trail = Rc::new(RefCell::new(DragTrail::new(
        ctx.cfg.particle_interval_ms,
        ctx.cfg.particle_spread_px,
        seed,
    )));

    let t = trail.clone();
    dom::listen(&container, "mousedown", move |_: web::MouseEvent| {
        t.borrow_mut().press();
    });
    let t = trail.clone();
    dom::listen(&ctx.document, "mouseup", move |_: web::MouseEvent| {
        t.borrow_mut().release();
    });

    let ctx_move = ctx.clone();
    dom::listen(&container, "mousemove", move |ev: web::MouseEvent| {
        let spec = trail.borrow_mut().on_move(
            frame::now_ms(),
            ev.client_x() as f64,
            ev.client_y() as f64,
        );
        if let Some(spec) = spec {
            emit_particle(&ctx_move, &spec);
        }
    });
    true
}
