//! Platform-free core of the nextgen-motion effect layer.
//!
//! Everything here is plain Rust so it can be exercised on the host: the web
//! frontend supplies the browser through the [`PulseScheduler`],
//! [`AudioBackend`], [`Animator`] and [`StartupHost`] seams.

pub mod config;
pub mod constants;
pub mod entrance;
pub mod ephemeral;
pub mod error;
pub mod interaction;
pub mod limiter;
pub mod pointer;
pub mod scroll;
pub mod startup;
pub mod text;
pub mod throttle;
pub mod tone;
pub mod tween;

pub use config::MotionConfig;
pub use entrance::{play_hero_entrances, HeroTargets};
pub use ephemeral::{DragTrail, EphemeralLedger, ParticleSpec, RippleSpec, VisualId};
pub use error::{MotionError, Result};
pub use interaction::{CursorState, ElementId, ElementState, InteractionRegistry};
pub use limiter::IntervalLimiter;
pub use pointer::{cursor_position, MagneticEffect, PointerSample, Rect, Tilt, TiltEffect};
pub use scroll::{install_scroll_effects, ScrollTargets, ScrollerOptions};
pub use startup::{Collaborators, StartTrigger, StartupHost, StartupPhase, StartupSequencer};
pub use text::{LetterToken, TitleLayout, TitleMarkup, Word};
pub use throttle::{FrameThrottle, PulseScheduler};
pub use tone::{AudioBackend, Note, ToneCue, ToneSynth, Waveform};
pub use tween::{Animator, Ease, Prop, ScrollBinding, ScrollMode, ToggleActions, Tween};
