//! DOM side of ephemeral visuals: owns each spawned element until its tween
//! completes, or until the ledger reports it overdue. Overdue visuals are
//! swept on the next spawn and by a backstop timer one pulse past the deadline.

use fnv::FnvHashMap;
use motion_core::constants::PULSE_GRACE_MS;
use motion_core::{Animator, EphemeralLedger, Tween, VisualId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::animator::GsapAnimator;
use crate::frame;

#[derive(Default)]
pub struct VisualHost {
    ledger: RefCell<EphemeralLedger>,
    elements: RefCell<FnvHashMap<VisualId, web::Element>>,
}

impl VisualHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Animate an already-attached element and remove it when done.
    pub fn spawn(self: &Rc<Self>, animator: &GsapAnimator, el: web::Element, tween: &Tween) {
        let now = frame::now_ms();
        self.sweep(now);
        let duration = tween.duration.unwrap_or(0.0);
        let id = self.ledger.borrow_mut().spawn(now, duration);
        self.elements.borrow_mut().insert(id, el.clone());
        let host = Rc::clone(self);
        animator.animate_to_then(&el.into(), tween, Box::new(move || host.retire(id)));

        let host = Rc::clone(self);
        let backstop_ms = (duration * 1000.0 + 2.0 * PULSE_GRACE_MS).ceil() as i32;
        _ = frame::after_ms(
            backstop_ms,
            Box::new(move || host.sweep(frame::now_ms())),
        );
    }

    fn retire(&self, id: VisualId) {
        if self.ledger.borrow_mut().retire(id) {
            self.detach(id);
        }
    }

    fn sweep(&self, now_ms: f64) {
        let overdue = self.ledger.borrow_mut().sweep(now_ms);
        if !overdue.is_empty() {
            log::debug!("[visuals] sweeping {} overdue", overdue.len());
        }
        for id in overdue {
            self.detach(id);
        }
    }

    fn detach(&self, id: VisualId) {
        let el = self.elements.borrow_mut().remove(&id);
        if let Some(el) = el {
            el.remove();
        }
    }
}
