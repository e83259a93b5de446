use motion_core::{play_hero_entrances, HeroTargets, TitleLayout, TitleMarkup};
use web_sys as web;

use crate::constants::{
    HERO_DESCRIPTION, HERO_LETTERS, HERO_LETTER_CLASS, HERO_TAG, HERO_TITLE, HERO_WORD_CLASS,
    HERO_WORD_GAP_EM,
};
use crate::context::EffectContext;
use crate::dom;
use crate::styles;

/// Replace the title's markup with per-word, per-letter spans.
/// Returns the number of letter spans, or `None` without a title.
pub fn decompose_title(document: &web::Document) -> Option<usize> {
    let title = dom::query(document, HERO_TITLE)?;
    let text = title.text_content().unwrap_or_default();
    let layout = TitleLayout::split(&text);
    title.set_inner_html(&layout.to_markup(&TitleMarkup {
        word_class: HERO_WORD_CLASS,
        letter_class: HERO_LETTER_CLASS,
        word_gap_em: HERO_WORD_GAP_EM,
    }));
    log::debug!(
        "[hero] title split into {} words, {} letters",
        layout.words().len(),
        layout.letter_count()
    );
    Some(layout.letter_count())
}

pub fn wire_hero(ctx: &EffectContext) -> usize {
    dom::inject_style(&ctx.document, styles::TITLE_CSS);
    let present = |sel: &'static str| dom::query(&ctx.document, sel).map(|_| sel);
    let targets = HeroTargets {
        letters: decompose_title(&ctx.document)
            .filter(|&n| n > 0)
            .map(|_| HERO_LETTERS),
        tag: present(HERO_TAG),
        description: present(HERO_DESCRIPTION),
    };
    play_hero_entrances(&*ctx.animator, &targets)
}
