//! Pointer geometry and the magnetic/tilt effects built on it.

use crate::constants::*;
use crate::interaction::{ElementId, InteractionRegistry};
use crate::tween::{Animator, Ease, Prop, Tween};
use glam::Vec2;

/// Client-space bounding box of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer position relative to the element's geometric center.
    #[inline]
    pub fn offset_from_center(&self, pointer: Vec2) -> Vec2 {
        pointer - self.center()
    }

    /// Pointer position relative to the element's top-left corner.
    #[inline]
    pub fn local(&self, pointer: Vec2) -> Vec2 {
        pointer - Vec2::new(self.left, self.top)
    }
}

/// Last pointer reading over one element; carried through the frame throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client: Vec2,
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

#[inline]
pub fn magnetic_offset(sample: &PointerSample, strength: f32) -> Vec2 {
    sample.rect.offset_from_center(sample.client) * strength
}

#[inline]
pub fn tilt_angles(sample: &PointerSample, divisor: f32) -> Tilt {
    let d = sample.rect.offset_from_center(sample.client) / divisor;
    Tilt {
        rotate_x: -d.y,
        rotate_y: d.x,
    }
}

/// Immediate placement of the cursor follower.
pub fn cursor_position(client: Vec2) -> Tween {
    Tween::new()
        .prop(Prop::X, client.x as f64)
        .prop(Prop::Y, client.y as f64)
}

/// Buttons drift toward the pointer and spring back on leave.
#[derive(Clone, Copy, Debug)]
pub struct MagneticEffect {
    pub strength: f32,
}

impl Default for MagneticEffect {
    fn default() -> Self {
        Self {
            strength: MAGNETIC_STRENGTH,
        }
    }
}

impl MagneticEffect {
    pub fn pull(&self, sample: &PointerSample) -> Tween {
        let off = magnetic_offset(sample, self.strength);
        Tween::new()
            .prop(Prop::X, off.x as f64)
            .prop(Prop::Y, off.y as f64)
            .duration(MAGNETIC_PULL_SEC)
            .ease(Ease::Power2Out)
    }

    pub fn release(&self) -> Tween {
        Tween::new()
            .prop(Prop::X, 0.0)
            .prop(Prop::Y, 0.0)
            .duration(MAGNETIC_RELEASE_SEC)
            .ease(Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.3,
            })
    }

    pub fn on_move<A: Animator>(&self, animator: &A, target: &A::Target, sample: &PointerSample) {
        animator.animate_to(target, &self.pull(sample));
    }

    pub fn on_leave<A: Animator>(&self, animator: &A, target: &A::Target) {
        animator.animate_to(target, &self.release());
    }

    /// Throttled move: a pulse that lands after `leave` must not undo the release.
    pub fn on_pulse<A: Animator>(
        &self,
        registry: &InteractionRegistry,
        id: ElementId,
        animator: &A,
        target: &A::Target,
        sample: &PointerSample,
    ) -> bool {
        if !registry.is_hovered(id) {
            return false;
        }
        self.on_move(animator, target, sample);
        true
    }
}

/// Two-axis rotation following the pointer across a larger surface.
#[derive(Clone, Copy, Debug)]
pub struct TiltEffect {
    pub divisor: f32,
}

impl Default for TiltEffect {
    fn default() -> Self {
        Self {
            divisor: TILT_DIVISOR,
        }
    }
}

impl TiltEffect {
    pub fn pull(&self, sample: &PointerSample) -> Tween {
        let tilt = tilt_angles(sample, self.divisor);
        Tween::new()
            .prop(Prop::RotateY, tilt.rotate_y as f64)
            .prop(Prop::RotateX, tilt.rotate_x as f64)
            .duration(TILT_PULL_SEC)
            .ease(Ease::Power2Out)
    }

    pub fn release(&self) -> Tween {
        Tween::new()
            .prop(Prop::RotateY, 0.0)
            .prop(Prop::RotateX, 0.0)
            .duration(TILT_RELEASE_SEC)
            .ease(Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            })
    }

    pub fn on_move<A: Animator>(&self, animator: &A, target: &A::Target, sample: &PointerSample) {
        animator.animate_to(target, &self.pull(sample));
    }

    pub fn on_leave<A: Animator>(&self, animator: &A, target: &A::Target) {
        animator.animate_to(target, &self.release());
    }

    /// Tilt only while the surface is still hovered.
    pub fn on_pulse<A: Animator>(
        &self,
        registry: &InteractionRegistry,
        id: ElementId,
        animator: &A,
        target: &A::Target,
        sample: &PointerSample,
    ) -> bool {
        if !registry.is_hovered(id) {
            return false;
        }
        self.on_move(animator, target, sample);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32) -> PointerSample {
        PointerSample {
            client: Vec2::new(x, y),
            rect: Rect::new(100.0, 200.0, 80.0, 40.0),
        }
    }

    #[test]
    fn magnetic_pull_is_a_fraction_of_center_offset() {
        // center is (140, 220)
        let off = magnetic_offset(&sample(150.0, 230.0), 0.3);
        assert!((off.x - 3.0).abs() < 1e-5);
        assert!((off.y - 3.0).abs() < 1e-5);
        assert_eq!(magnetic_offset(&sample(140.0, 220.0), 0.3), Vec2::ZERO);
    }

    #[test]
    fn tilt_maps_horizontal_to_y_axis_and_inverts_vertical() {
        let t = tilt_angles(&sample(180.0, 260.0), 40.0);
        assert!((t.rotate_y - 1.0).abs() < 1e-5);
        assert!((t.rotate_x + 1.0).abs() < 1e-5);
    }

    #[test]
    fn release_returns_to_rest_with_overshoot() {
        let rel = MagneticEffect::default().release();
        assert_eq!(rel.get(Prop::X), Some(0.0));
        assert_eq!(rel.get(Prop::Y), Some(0.0));
        assert!(matches!(rel.ease, Some(Ease::ElasticOut { .. })));
        let tilt = TiltEffect::default().release();
        assert_eq!(tilt.get(Prop::RotateX), Some(0.0));
    }
}
