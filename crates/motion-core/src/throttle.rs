//! Pulse-aligned coalescing of high-frequency input.
//!
//! A [`FrameThrottle`] owns one throttle token: the first `guard` call inside a
//! rendering pulse schedules the handler, later calls only replace the captured
//! payload. When the pulse fires the handler sees the latest payload and the
//! token goes back to idle.

use std::cell::RefCell;
use std::rc::Rc;

/// Source of rendering pulses (`requestAnimationFrame` in the browser).
pub trait PulseScheduler {
    /// Run `callback` once on the next pulse.
    fn request_pulse(&self, callback: Box<dyn FnOnce()>);
}

impl<S: PulseScheduler + ?Sized> PulseScheduler for Rc<S> {
    fn request_pulse(&self, callback: Box<dyn FnOnce()>) {
        (**self).request_pulse(callback)
    }
}

struct Token<T> {
    pending: bool,
    latest: Option<T>,
}

pub struct FrameThrottle<T, S> {
    token: Rc<RefCell<Token<T>>>,
    scheduler: S,
    handler: Rc<dyn Fn(T)>,
}

impl<T: 'static, S: PulseScheduler> FrameThrottle<T, S> {
    pub fn new(scheduler: S, handler: impl Fn(T) + 'static) -> Self {
        Self {
            token: Rc::new(RefCell::new(Token {
                pending: false,
                latest: None,
            })),
            scheduler,
            handler: Rc::new(handler),
        }
    }

    /// Capture `data` for the next pulse. Returns `true` when this call
    /// scheduled the pulse, `false` when one was already pending.
    pub fn guard(&self, data: T) -> bool {
        let first = {
            let mut token = self.token.borrow_mut();
            token.latest = Some(data);
            !std::mem::replace(&mut token.pending, true)
        };
        if first {
            let token = self.token.clone();
            let handler = self.handler.clone();
            self.scheduler.request_pulse(Box::new(move || {
                // Reset before running so the handler may re-arm the throttle.
                let latest = {
                    let mut t = token.borrow_mut();
                    t.pending = false;
                    t.latest.take()
                };
                if let Some(data) = latest {
                    handler(data);
                }
            }));
        }
        first
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.token.borrow().pending
    }
}
