use motion_core::{install_scroll_effects, ScrollTargets};
use web_sys as web;

use crate::constants::{
    ATMOSPHERE, HERO, PROGRESS_CLASS, PROGRESS_FILL, PROGRESS_FILL_CLASS, REVEAL_SECTION,
};
use crate::context::EffectContext;
use crate::dom;
use crate::styles;

fn create_progress_bar(document: &web::Document) -> bool {
    let (Some(bar), Some(fill)) = (
        dom::create_div(document, PROGRESS_CLASS),
        dom::create_div(document, PROGRESS_FILL_CLASS),
    ) else {
        return false;
    };
    if bar.append_child(&fill).is_err() {
        return false;
    }
    dom::inject_style(document, styles::PROGRESS_CSS);
    dom::append_to_body(document, &bar)
}

/// Progress bar, hero parallax and section reveal. Returns how many were bound.
pub fn wire_scroll(ctx: &EffectContext) -> usize {
    let has = |sel: &str| dom::query(&ctx.document, sel).is_some();
    let targets = ScrollTargets {
        progress_fill: create_progress_bar(&ctx.document).then_some(PROGRESS_FILL),
        parallax: (has(ATMOSPHERE) && has(HERO)).then_some((ATMOSPHERE, HERO)),
        reveal: has(REVEAL_SECTION).then_some(REVEAL_SECTION),
    };
    install_scroll_effects(&*ctx.animator, &ctx.cfg, &targets)
}
