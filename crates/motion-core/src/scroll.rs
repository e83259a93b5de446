//! Scroll-linked effects expressed as scroll-bound tweens, plus the options
//! for the smooth-scroll collaborator.

use crate::config::MotionConfig;
use crate::constants::*;
use crate::tween::{Animator, Ease, Prop, ScrollBinding, ScrollMode, ToggleActions, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

/// Smooth-scroll configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollerOptions {
    pub duration: f64,
    pub orientation: Orientation,
    pub gesture_orientation: Orientation,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            orientation: Orientation::Vertical,
            gesture_orientation: Orientation::Vertical,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

/// Exponential-out curve handed to the scroller, clamped to 1.
#[inline]
pub fn scroller_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Whole-document progress: fill scale goes 0 -> 1 from top to bottom.
pub fn progress_tween(cfg: &MotionConfig) -> Tween {
    Tween::new()
        .prop(Prop::ScaleX, 1.0)
        .ease(Ease::None)
        .scroll(ScrollBinding {
            trigger: "body".into(),
            start: "top top".into(),
            end: Some("bottom bottom".into()),
            mode: ScrollMode::Scrub(cfg.progress_scrub_sec),
        })
}

/// Background drift across the hero's own extent, linear.
pub fn parallax_tween(cfg: &MotionConfig, hero: &str) -> Tween {
    Tween::new()
        .prop(Prop::YPercent, PARALLAX_Y_PERCENT)
        .ease(Ease::None)
        .scroll(ScrollBinding {
            trigger: hero.into(),
            start: "top top".into(),
            end: Some("bottom top".into()),
            mode: ScrollMode::Scrub(cfg.parallax_scrub_sec),
        })
}

/// Two-state reveal: plays when the trigger's top crosses the threshold line,
/// reverses when scrolled back above it.
pub fn reveal_tween(cfg: &MotionConfig, trigger: &str) -> Tween {
    let pct = (cfg.reveal_viewport_fraction * 100.0).round() as u32;
    Tween::new()
        .prop(Prop::Y, REVEAL_OFFSET_Y)
        .prop(Prop::Opacity, 0.0)
        .duration(REVEAL_DURATION_SEC)
        .ease(Ease::Power3Out)
        .scroll(ScrollBinding {
            trigger: trigger.into(),
            start: format!("top {}%", pct),
            end: None,
            mode: ScrollMode::Toggle(ToggleActions::PLAY_REVERSE),
        })
}

/// Which optional scroll targets exist on the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTargets<'a> {
    pub progress_fill: Option<&'a str>,
    pub parallax: Option<(&'a str, &'a str)>,
    pub reveal: Option<&'a str>,
}

/// Bind every present scroll effect. Returns how many were bound.
pub fn install_scroll_effects<A: Animator>(
    animator: &A,
    cfg: &MotionConfig,
    targets: &ScrollTargets<'_>,
) -> usize {
    let mut bound = 0;
    if let Some(fill) = targets.progress_fill {
        animator.animate_to(&animator.select(fill), &progress_tween(cfg));
        bound += 1;
    }
    if let Some((layer, hero)) = targets.parallax {
        animator.animate_to(&animator.select(layer), &parallax_tween(cfg, hero));
        bound += 1;
    }
    if let Some(section) = targets.reveal {
        animator.animate_from(&animator.select(section), &reveal_tween(cfg, section));
        bound += 1;
    }
    bound
}
