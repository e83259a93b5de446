//! Startup gating.
//!
//! `waiting-for-signal -> initializing -> ready`, or `aborted` when reduced
//! motion is preferred or the animator is missing. Waiting is a race between
//! a one-shot readiness observer and a cancellable fallback timer; whichever
//! resolves first wins and tears the other down.

use crate::error::{MotionError, Result};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupPhase {
    WaitingForSignal,
    Initializing,
    Ready,
    Aborted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartTrigger {
    /// Marker was already set when startup ran.
    AlreadyReady,
    Marker,
    Timeout,
}

#[derive(Debug)]
pub struct StartupSequencer {
    phase: StartupPhase,
    trigger: Option<StartTrigger>,
}

impl Default for StartupSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupSequencer {
    pub fn new() -> Self {
        Self {
            phase: StartupPhase::WaitingForSignal,
            trigger: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    #[inline]
    pub fn trigger(&self) -> Option<StartTrigger> {
        self.trigger
    }

    fn try_initialize(&mut self, trigger: StartTrigger) -> bool {
        if self.phase != StartupPhase::WaitingForSignal {
            return false;
        }
        self.phase = StartupPhase::Initializing;
        self.trigger = Some(trigger);
        log::info!("[startup] initializing ({:?})", trigger);
        true
    }

    pub fn abort(&mut self) {
        if matches!(
            self.phase,
            StartupPhase::WaitingForSignal | StartupPhase::Initializing
        ) {
            self.phase = StartupPhase::Aborted;
        }
    }

    pub fn on_already_ready(&mut self) -> bool {
        self.try_initialize(StartTrigger::AlreadyReady)
    }

    pub fn on_marker(&mut self) -> bool {
        self.try_initialize(StartTrigger::Marker)
    }

    /// The fallback only forces initialization when the animator is loaded.
    pub fn on_timeout(&mut self, animator_present: bool) -> bool {
        if !animator_present {
            if self.phase == StartupPhase::WaitingForSignal {
                log::warn!("[startup] readiness timeout without animator; giving up");
                self.phase = StartupPhase::Aborted;
            }
            return false;
        }
        self.try_initialize(StartTrigger::Timeout)
    }

    pub fn finish(&mut self, ok: bool) {
        if self.phase == StartupPhase::Initializing {
            self.phase = if ok {
                StartupPhase::Ready
            } else {
                StartupPhase::Aborted
            };
        }
    }
}

/// Page scripts the effect layer drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collaborators {
    pub animator: bool,
    pub scroll_plugin: bool,
}

impl Collaborators {
    /// Both are required: without the plugin, scroll-bound tweens would play at load.
    pub fn require(self) -> Result<()> {
        if !self.animator {
            return Err(MotionError::MissingCollaborator("gsap"));
        }
        if !self.scroll_plugin {
            return Err(MotionError::MissingCollaborator("ScrollTrigger"));
        }
        Ok(())
    }
}

/// Page services the sequencer needs.
pub trait StartupHost {
    type Timer;

    fn prefers_reduced_motion(&self) -> bool;
    fn marker_present(&self) -> bool;
    fn animator_present(&self) -> bool;
    /// Call `on_change` whenever the marker's carrier may have changed.
    fn observe_marker(&self, on_change: Box<dyn Fn()>);
    fn disconnect_observer(&self);
    fn start_timer(&self, delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> Self::Timer;
    fn cancel_timer(&self, timer: Self::Timer);
}

/// Run the startup race. `init` runs at most once and reports whether the
/// effect layer came up.
pub fn start<H, F>(host: Rc<H>, timeout_ms: u32, init: F) -> Rc<RefCell<StartupSequencer>>
where
    H: StartupHost + 'static,
    H::Timer: 'static,
    F: FnOnce() -> bool + 'static,
{
    let seq = Rc::new(RefCell::new(StartupSequencer::new()));

    if host.prefers_reduced_motion() {
        log::info!("[startup] reduced motion preferred; effects disabled");
        seq.borrow_mut().abort();
        return seq;
    }

    let init_slot: Rc<RefCell<Option<F>>> = Rc::new(RefCell::new(Some(init)));
    let run: Rc<dyn Fn()> = {
        let seq = seq.clone();
        Rc::new(move || {
            let init = init_slot.borrow_mut().take();
            if let Some(init) = init {
                let ok = init();
                seq.borrow_mut().finish(ok);
            }
        })
    };

    if host.marker_present() {
        let won = seq.borrow_mut().on_already_ready();
        if won {
            run();
        }
        return seq;
    }

    let timer_slot: Rc<RefCell<Option<H::Timer>>> = Rc::new(RefCell::new(None));

    {
        let host_o = host.clone();
        let seq_o = seq.clone();
        let timer_o = timer_slot.clone();
        let run_o = run.clone();
        host.observe_marker(Box::new(move || {
            if !host_o.marker_present() {
                return;
            }
            let won = seq_o.borrow_mut().on_marker();
            if won {
                host_o.disconnect_observer();
                let pending = timer_o.borrow_mut().take();
                if let Some(timer) = pending {
                    host_o.cancel_timer(timer);
                }
                run_o();
            }
        }));
    }

    let host_t = host.clone();
    let seq_t = seq.clone();
    let timer_t = timer_slot.clone();
    let timer = host.start_timer(
        timeout_ms,
        Box::new(move || {
            drop(timer_t.borrow_mut().take());
            host_t.disconnect_observer();
            let won = seq_t.borrow_mut().on_timeout(host_t.animator_present());
            if won {
                run();
            }
        }),
    );
    *timer_slot.borrow_mut() = Some(timer);

    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_transition_to_initializing() {
        let mut s = StartupSequencer::new();
        assert!(s.on_marker());
        assert!(!s.on_timeout(true));
        assert!(!s.on_marker());
        assert_eq!(s.trigger(), Some(StartTrigger::Marker));
        s.finish(true);
        assert_eq!(s.phase(), StartupPhase::Ready);
    }

    #[test]
    fn failed_init_ends_aborted() {
        let mut s = StartupSequencer::new();
        assert!(s.on_timeout(true));
        s.finish(false);
        assert_eq!(s.phase(), StartupPhase::Aborted);
    }

    #[test]
    fn both_collaborators_are_required() {
        let all = Collaborators {
            animator: true,
            scroll_plugin: true,
        };
        assert!(all.require().is_ok());
        let no_plugin = Collaborators {
            scroll_plugin: false,
            ..all
        };
        assert!(matches!(
            no_plugin.require(),
            Err(MotionError::MissingCollaborator("ScrollTrigger"))
        ));
        assert!(matches!(
            Collaborators::default().require(),
            Err(MotionError::MissingCollaborator("gsap"))
        ));
    }

    #[test]
    fn timeout_without_animator_aborts() {
        let mut s = StartupSequencer::new();
        assert!(!s.on_timeout(false));
        assert_eq!(s.phase(), StartupPhase::Aborted);
        assert!(!s.on_marker());
    }
}
