//! Declarative tween descriptors and the animator seam.
//!
//! The effect layer never interpolates anything itself. It decides which
//! properties go where, for how long, with which ease and scroll binding, and
//! hands a [`Tween`] to an [`Animator`] (GSAP in the browser).

use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    YPercent,
    RotateX,
    RotateY,
    RotationX,
    Scale,
    ScaleX,
    Opacity,
    TransformPerspective,
}

impl Prop {
    /// Property name understood by the animator.
    pub fn key(self) -> &'static str {
        match self {
            Prop::X => "x",
            Prop::Y => "y",
            Prop::YPercent => "yPercent",
            Prop::RotateX => "rotateX",
            Prop::RotateY => "rotateY",
            Prop::RotationX => "rotationX",
            Prop::Scale => "scale",
            Prop::ScaleX => "scaleX",
            Prop::Opacity => "opacity",
            Prop::TransformPerspective => "transformPerspective",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    None,
    Power2Out,
    Power3Out,
    BackOut(f32),
    ElasticOut { amplitude: f32, period: f32 },
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::None => write!(f, "none"),
            Ease::Power2Out => write!(f, "power2.out"),
            Ease::Power3Out => write!(f, "power3.out"),
            Ease::BackOut(overshoot) => write!(f, "back.out({})", overshoot),
            Ease::ElasticOut { amplitude, period } => {
                write!(f, "elastic.out({}, {})", amplitude, period)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
    Restart,
    Reset,
    None,
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToggleAction::Play => "play",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::None => "none",
        })
    }
}

/// What happens on enter, leave, enter-back and leave-back of a trigger range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Reveal going down, un-reveal when scrolled back above the trigger.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollMode {
    /// Progress follows scroll position, smoothed by the given lag in seconds.
    Scrub(f64),
    Toggle(ToggleActions),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBinding {
    pub trigger: String,
    pub start: String,
    pub end: Option<String>,
    pub mode: ScrollMode,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tween {
    pub props: SmallVec<[(Prop, f64); 4]>,
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
    pub delay: Option<f64>,
    pub stagger: Option<f64>,
    pub scroll: Option<ScrollBinding>,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, prop: Prop, value: f64) -> Self {
        self.props.push((prop, value));
        self
    }

    pub fn duration(mut self, sec: f64) -> Self {
        self.duration = Some(sec);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn delay(mut self, sec: f64) -> Self {
        self.delay = Some(sec);
        self
    }

    pub fn stagger(mut self, sec: f64) -> Self {
        self.stagger = Some(sec);
        self
    }

    pub fn scroll(mut self, binding: ScrollBinding) -> Self {
        self.scroll = Some(binding);
        self
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.props.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }
}

/// Fire-and-forget tweening collaborator. A newer command on the same target
/// supersedes any in-flight one.
pub trait Animator {
    type Target;

    fn select(&self, selector: &str) -> Self::Target;
    fn animate_from(&self, target: &Self::Target, tween: &Tween);
    fn animate_to(&self, target: &Self::Target, tween: &Tween);
    /// Like `animate_to`, running `on_complete` once the tween finishes.
    fn animate_to_then(&self, target: &Self::Target, tween: &Tween, on_complete: Box<dyn FnOnce()>);
    fn set_immediate(&self, target: &Self::Target, tween: &Tween);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_names_match_animator_syntax() {
        assert_eq!(Ease::Power2Out.to_string(), "power2.out");
        assert_eq!(Ease::BackOut(1.5).to_string(), "back.out(1.5)");
        assert_eq!(
            Ease::ElasticOut { amplitude: 1.0, period: 0.3 }.to_string(),
            "elastic.out(1, 0.3)"
        );
    }

    #[test]
    fn toggle_actions_render_in_trigger_order() {
        assert_eq!(ToggleActions::PLAY_REVERSE.to_string(), "play none none reverse");
    }
}
