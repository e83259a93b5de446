use motion_core::MotionConfig;
use std::rc::Rc;
use web_sys as web;

use crate::animator::GsapAnimator;
use crate::visuals::VisualHost;

/// What every effect needs once startup has found the animator.
#[derive(Clone)]
pub struct EffectContext {
    pub document: web::Document,
    pub animator: Rc<GsapAnimator>,
    pub cfg: MotionConfig,
    pub visuals: Rc<VisualHost>,
}
