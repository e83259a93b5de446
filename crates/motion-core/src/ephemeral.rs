//! Self-removing one-shot visuals: click ripples and drag particles.
//!
//! The [`EphemeralLedger`] records a deadline for every spawned visual. The
//! normal path retires a visual from its animation's completion callback;
//! `sweep` hands back anything still alive one pulse past its deadline.

use crate::constants::*;
use crate::limiter::IntervalLimiter;
use crate::pointer::Rect;
use crate::tween::{Ease, Prop, Tween};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type VisualId = u64;

#[derive(Debug)]
pub struct EphemeralLedger {
    live: FnvHashMap<VisualId, f64>,
    next_id: VisualId,
    grace_ms: f64,
}

impl Default for EphemeralLedger {
    fn default() -> Self {
        Self::new(PULSE_GRACE_MS)
    }
}

impl EphemeralLedger {
    pub fn new(grace_ms: f64) -> Self {
        Self {
            live: FnvHashMap::default(),
            next_id: 0,
            grace_ms,
        }
    }

    pub fn spawn(&mut self, now_ms: f64, duration_sec: f64) -> VisualId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, now_ms + duration_sec * 1000.0);
        id
    }

    /// Returns `false` if the visual was already retired or swept.
    pub fn retire(&mut self, id: VisualId) -> bool {
        self.live.remove(&id).is_some()
    }

    /// Remove and return every visual whose deadline plus one pulse has passed.
    pub fn sweep(&mut self, now_ms: f64) -> Vec<VisualId> {
        let grace = self.grace_ms;
        let overdue: Vec<VisualId> = self
            .live
            .iter()
            .filter(|(_, deadline)| now_ms > **deadline + grace)
            .map(|(&id, _)| id)
            .collect();
        for id in &overdue {
            self.live.remove(id);
        }
        overdue
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Where a ripple starts, in the host element's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSpec {
    pub left: f32,
    pub top: f32,
}

impl RippleSpec {
    pub fn at(rect: &Rect, client: Vec2) -> Self {
        let local = rect.local(client);
        Self {
            left: local.x,
            top: local.y,
        }
    }

    pub fn tween() -> Tween {
        Tween::new()
            .prop(Prop::Scale, RIPPLE_MAX_SCALE)
            .prop(Prop::Opacity, 0.0)
            .duration(RIPPLE_DURATION_SEC)
            .ease(Ease::Power2Out)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl ParticleSpec {
    pub fn tween(&self) -> Tween {
        Tween::new()
            .prop(Prop::Scale, 0.0)
            .prop(Prop::Opacity, 0.0)
            .prop(Prop::Y, self.dy)
            .prop(Prop::X, self.dx)
            .duration(PARTICLE_DURATION_SEC)
            .ease(Ease::Power2Out)
    }
}

/// Press-and-hold drag gesture emitting rate-limited particles.
#[derive(Debug)]
pub struct DragTrail {
    dragging: bool,
    limiter: IntervalLimiter,
    spread: f64,
    rng: StdRng,
}

impl DragTrail {
    pub fn new(interval_ms: f64, spread: f64, seed: u64) -> Self {
        Self {
            dragging: false,
            limiter: IntervalLimiter::new(interval_ms),
            spread,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn press(&mut self) {
        self.dragging = true;
    }

    #[inline]
    pub fn release(&mut self) {
        self.dragging = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A particle to emit for this move, if dragging and the interval allows.
    pub fn on_move(&mut self, now_ms: f64, x: f64, y: f64) -> Option<ParticleSpec> {
        if !self.dragging || !self.limiter.try_acquire(now_ms) {
            return None;
        }
        let s = self.spread;
        Some(ParticleSpec {
            x,
            y,
            dx: self.rng.gen_range(-s..s),
            dy: self.rng.gen_range(-s..s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_anchored_at_local_click_point() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        let r = RippleSpec::at(&rect, Vec2::new(35.0, 30.0));
        assert_eq!(r, RippleSpec { left: 25.0, top: 10.0 });
        let tw = RippleSpec::tween();
        assert_eq!(tw.get(Prop::Scale), Some(8.0));
        assert_eq!(tw.get(Prop::Opacity), Some(0.0));
    }

    #[test]
    fn moves_without_press_emit_nothing() {
        let mut trail = DragTrail::new(50.0, 30.0, 7);
        assert!(trail.on_move(0.0, 1.0, 1.0).is_none());
        trail.press();
        assert!(trail.on_move(100.0, 1.0, 1.0).is_some());
        trail.release();
        assert!(trail.on_move(500.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn retire_after_sweep_is_a_noop() {
        let mut ledger = EphemeralLedger::new(16.0);
        let id = ledger.spawn(0.0, 0.6);
        assert!(ledger.sweep(610.0).is_empty());
        assert_eq!(ledger.sweep(617.0), vec![id]);
        assert!(!ledger.retire(id));
    }
}
