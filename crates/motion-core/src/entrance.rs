//! One-shot page entrances: hero letters, hero copy and the wheel's resting tilt.

use crate::constants::*;
use crate::tween::{Animator, Ease, Prop, Tween};

/// Letters rise and swing into place one after another.
pub fn letter_entrance() -> Tween {
    Tween::new()
        .prop(Prop::Y, LETTER_RISE_PX)
        .prop(Prop::Opacity, 0.0)
        .prop(Prop::RotationX, LETTER_ROTATION_X_DEG)
        .stagger(LETTER_STAGGER_SEC)
        .duration(LETTER_DURATION_SEC)
        .ease(Ease::BackOut(LETTER_OVERSHOOT))
        .delay(LETTER_DELAY_SEC)
}

pub fn fade_up(delay_sec: f64) -> Tween {
    Tween::new()
        .prop(Prop::Y, FADE_UP_PX)
        .prop(Prop::Opacity, 0.0)
        .duration(FADE_UP_SEC)
        .ease(Ease::Power3Out)
        .delay(delay_sec)
}

pub fn wheel_rest() -> Tween {
    Tween::new()
        .prop(Prop::RotationX, WHEEL_TILT_DEG)
        .prop(Prop::TransformPerspective, WHEEL_PERSPECTIVE_PX as f64)
}

/// Optional hero pieces present on the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroTargets<'a> {
    pub letters: Option<&'a str>,
    pub tag: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Start every present hero entrance. Returns how many were started.
pub fn play_hero_entrances<A: Animator>(animator: &A, targets: &HeroTargets<'_>) -> usize {
    let plan = [
        (targets.letters, letter_entrance()),
        (targets.tag, fade_up(TAG_DELAY_SEC)),
        (targets.description, fade_up(DESCRIPTION_DELAY_SEC)),
    ];
    let mut started = 0;
    for (selector, tween) in plan.iter() {
        if let Some(sel) = selector {
            animator.animate_from(&animator.select(sel), tween);
            started += 1;
        }
    }
    started
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_stagger_after_copy_starts() {
        let letters = letter_entrance();
        assert_eq!(letters.stagger, Some(0.02));
        assert_eq!(letters.ease, Some(Ease::BackOut(1.5)));
        assert!(fade_up(TAG_DELAY_SEC).delay < letters.delay);
        assert!(fade_up(DESCRIPTION_DELAY_SEC).delay > letters.delay);
    }
}
