// Host-side tests for pointer, scroll and ephemeral effects driven through a
// recording animator and a manual pulse clock.

use motion_core::ephemeral::{DragTrail, EphemeralLedger, RippleSpec};
use motion_core::interaction::{ElementId, InteractionRegistry};
use motion_core::pointer::{MagneticEffect, PointerSample, Rect, TiltEffect};
use motion_core::scroll::{install_scroll_effects, ScrollTargets};
use motion_core::text::TitleLayout;
use motion_core::throttle::{FrameThrottle, PulseScheduler};
use motion_core::tween::{Animator, Prop, ScrollMode, Tween};
use motion_core::MotionConfig;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    From(String, Tween),
    To(String, Tween),
    Set(String, Tween),
}

#[derive(Default)]
struct RecordingAnimator {
    calls: RefCell<Vec<Call>>,
    completions: RefCell<Vec<(f64, Box<dyn FnOnce()>)>>,
}

impl Animator for RecordingAnimator {
    type Target = String;

    fn select(&self, selector: &str) -> String {
        selector.to_string()
    }
    fn animate_from(&self, target: &String, tween: &Tween) {
        self.calls.borrow_mut().push(Call::From(target.clone(), tween.clone()));
    }
    fn animate_to(&self, target: &String, tween: &Tween) {
        self.calls.borrow_mut().push(Call::To(target.clone(), tween.clone()));
    }
    fn animate_to_then(&self, target: &String, tween: &Tween, on_complete: Box<dyn FnOnce()>) {
        self.animate_to(target, tween);
        let dur = tween.duration.unwrap_or(0.0);
        self.completions.borrow_mut().push((dur, on_complete));
    }
    fn set_immediate(&self, target: &String, tween: &Tween) {
        self.calls.borrow_mut().push(Call::Set(target.clone(), tween.clone()));
    }
}

#[derive(Default)]
struct ManualPulse {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ManualPulse {
    fn fire(&self) {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for cb in due {
            cb();
        }
    }
}

impl PulseScheduler for ManualPulse {
    fn request_pulse(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push(callback);
    }
}

fn button() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 50.0)
}

#[test]
fn throttled_magnetic_pull_retargets_once_per_pulse_with_latest_pointer() {
    let animator = Rc::new(RecordingAnimator::default());
    let pulse = Rc::new(ManualPulse::default());
    let magnet = MagneticEffect::default();
    let anim = animator.clone();
    let throttle = FrameThrottle::new(pulse.clone(), move |s: PointerSample| {
        magnet.on_move(&*anim, &".cta-main".to_string(), &s)
    });

    for x in 0..20 {
        throttle.guard(PointerSample {
            client: glam::Vec2::new(x as f32 * 5.0, 25.0),
            rect: button(),
        });
    }
    pulse.fire();

    let calls = animator.calls.borrow();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::To(target, tw) => {
            assert_eq!(target, ".cta-main");
            // last x = 95, center 50 -> 45 * 0.3
            assert!((tw.get(Prop::X).unwrap() - 13.5).abs() < 1e-4);
            assert_eq!(tw.get(Prop::Y), Some(0.0));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

fn hover_gated_pull(
    animator: &Rc<RecordingAnimator>,
    pulse: &Rc<ManualPulse>,
    registry: &Rc<RefCell<InteractionRegistry>>,
    id: ElementId,
) -> FrameThrottle<PointerSample, Rc<ManualPulse>> {
    let magnet = MagneticEffect::default();
    let (anim, reg) = (animator.clone(), registry.clone());
    FrameThrottle::new(pulse.clone(), move |s: PointerSample| {
        magnet.on_pulse(&reg.borrow(), id, &*anim, &".btn-header".to_string(), &s);
    })
}

fn last_x(animator: &RecordingAnimator) -> Option<f64> {
    match animator.calls.borrow().last() {
        Some(Call::To(_, tw)) => tw.get(Prop::X),
        _ => None,
    }
}

#[test]
fn pull_pending_at_leave_does_not_undo_the_release() {
    let animator = Rc::new(RecordingAnimator::default());
    let pulse = Rc::new(ManualPulse::default());
    let registry = Rc::new(RefCell::new(InteractionRegistry::new()));
    let id = registry.borrow_mut().register();
    let pull = hover_gated_pull(&animator, &pulse, &registry, id);

    registry.borrow_mut().enter(id);
    pull.guard(PointerSample {
        client: glam::Vec2::new(90.0, 40.0),
        rect: button(),
    });
    registry.borrow_mut().leave(id);
    MagneticEffect::default().on_leave(&*animator, &".btn-header".to_string());
    pulse.fire();

    assert_eq!(animator.calls.borrow().len(), 1);
    assert_eq!(last_x(&animator), Some(0.0));
    assert!(!pull.is_pending());
}

#[test]
fn pull_lands_while_still_hovered() {
    let animator = Rc::new(RecordingAnimator::default());
    let pulse = Rc::new(ManualPulse::default());
    let registry = Rc::new(RefCell::new(InteractionRegistry::new()));
    let id = registry.borrow_mut().register();
    let pull = hover_gated_pull(&animator, &pulse, &registry, id);

    registry.borrow_mut().enter(id);
    pull.guard(PointerSample {
        client: glam::Vec2::new(90.0, 40.0),
        rect: button(),
    });
    pulse.fire();

    // (90 - 50) * 0.3
    let x = last_x(&animator).unwrap();
    assert!((x - 12.0).abs() < 1e-4);
}

#[test]
fn tilt_pulse_after_leave_is_dropped() {
    let animator = RecordingAnimator::default();
    let mut surfaces = InteractionRegistry::new();
    let hero = surfaces.register();
    let tilt = TiltEffect::default();
    let target = ".hero-content".to_string();
    let sample = PointerSample {
        client: glam::Vec2::new(10.0, 10.0),
        rect: Rect::new(0.0, 0.0, 800.0, 600.0),
    };

    surfaces.enter(hero);
    assert!(tilt.on_pulse(&surfaces, hero, &animator, &target, &sample));
    surfaces.leave(hero);
    tilt.on_leave(&animator, &target);
    assert!(!tilt.on_pulse(&surfaces, hero, &animator, &target, &sample));

    let calls = animator.calls.borrow();
    assert_eq!(calls.len(), 2);
    match calls.last() {
        Some(Call::To(_, tw)) => assert_eq!(tw.get(Prop::RotateY), Some(0.0)),
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn particle_count_is_bounded_by_elapsed_interval() {
    let mut trail = DragTrail::new(50.0, 30.0, 1);
    trail.press();
    let mut emitted = 0;
    let mut t = 0.0;
    while t <= 1000.0 {
        if let Some(p) = trail.on_move(t, 10.0, 20.0) {
            assert!(p.dx >= -30.0 && p.dx < 30.0);
            assert!(p.dy >= -30.0 && p.dy < 30.0);
            emitted += 1;
        }
        t += 7.0;
    }
    let elapsed = 994.0; // last sample time
    assert!(emitted as f64 <= elapsed / 50.0 + 1.0);
    assert!(emitted >= 15);
}

#[test]
fn ephemeral_visuals_are_gone_one_second_after_trigger() {
    let animator = RecordingAnimator::default();
    let ledger = Rc::new(RefCell::new(EphemeralLedger::default()));
    let mut trail = DragTrail::new(50.0, 30.0, 9);
    trail.press();

    let mut t = 0.0;
    while t < 300.0 {
        if let Some(p) = trail.on_move(t, 5.0, 5.0) {
            let id = ledger.borrow_mut().spawn(t, 0.6);
            let l = ledger.clone();
            animator.animate_to_then(&"particle".into(), &p.tween(), Box::new(move || {
                l.borrow_mut().retire(id);
            }));
        }
        t += 10.0;
    }
    let id = ledger.borrow_mut().spawn(t, 0.6);
    let l = ledger.clone();
    animator.animate_to_then(&"ripple".into(), &RippleSpec::tween(), Box::new(move || {
        l.borrow_mut().retire(id);
    }));
    assert!(ledger.borrow().live_count() > 1);

    // every tween completes after its own duration
    let completions: Vec<_> = animator.completions.borrow_mut().drain(..).collect();
    for (dur, done) in completions {
        assert!(dur <= 0.6 + 1e-9);
        done();
    }
    assert_eq!(ledger.borrow().live_count(), 0);
    assert!(ledger.borrow_mut().sweep(t + 1000.0).is_empty());
}

#[test]
fn sweep_collects_visuals_whose_completion_never_fired() {
    let mut ledger = EphemeralLedger::default();
    let a = ledger.spawn(0.0, 0.6);
    let b = ledger.spawn(500.0, 0.6);
    let mut swept = ledger.sweep(1000.0);
    swept.sort_unstable();
    assert_eq!(swept, vec![a]);
    assert_eq!(ledger.sweep(1200.0), vec![b]);
    assert_eq!(ledger.live_count(), 0);
}

#[test]
fn scroll_effects_bind_only_present_targets() {
    let animator = RecordingAnimator::default();
    let cfg = MotionConfig::default();
    let bound = install_scroll_effects(&animator, &cfg, &ScrollTargets {
        progress_fill: Some(".scroll-progress-fill"),
        parallax: Some((".atmosphere", ".hero")),
        reveal: None,
    });
    assert_eq!(bound, 2);
    let calls = animator.calls.borrow();
    match &calls[1] {
        Call::To(target, tw) => {
            assert_eq!(target, ".atmosphere");
            assert_eq!(tw.get(Prop::YPercent), Some(-20.0));
            let binding = tw.scroll.as_ref().unwrap();
            assert_eq!(binding.trigger, ".hero");
            assert_eq!(binding.mode, ScrollMode::Scrub(1.0));
        }
        other => panic!("unexpected call {:?}", other),
    }

    let animator = RecordingAnimator::default();
    install_scroll_effects(&animator, &cfg, &ScrollTargets {
        reveal: Some(".cta-section"),
        ..Default::default()
    });
    assert!(matches!(&animator.calls.borrow()[0], Call::From(t, _) if t == ".cta-section"));
}

#[test]
fn hero_title_splits_into_word_groups_and_letters() {
    let layout = TitleLayout::split("Rent Smarter Today");
    assert_eq!(layout.words().len(), 3);
    assert_eq!(layout.letter_count(), 16);

    let letters: Vec<_> = layout.letters().collect();
    let mut rebuilt = vec![String::new(); 3];
    for tok in &letters {
        rebuilt[tok.word_index].push(tok.letter);
    }
    assert_eq!(rebuilt, vec!["Rent", "Smarter", "Today"]);

    let html = layout.to_markup(&motion_core::TitleMarkup {
        word_class: "hero-word",
        letter_class: "hero-letter",
        word_gap_em: 0.25,
    });
    assert_eq!(html.matches("class=\"hero-word\"").count(), 3);
    assert_eq!(html.matches("class=\"hero-letter\"").count(), 16);
    assert!(html.contains("margin-right: 0.25em;"));
}
