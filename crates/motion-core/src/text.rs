//! Title decomposition into per-word, per-letter units for staggered reveal.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterToken {
    pub word_index: usize,
    pub letter: char,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub index: usize,
    pub letters: Vec<char>,
}

impl Word {
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleLayout {
    words: Vec<Word>,
}

/// Class names and spacing used when re-rendering a title.
#[derive(Clone, Copy, Debug)]
pub struct TitleMarkup<'a> {
    pub word_class: &'a str,
    pub letter_class: &'a str,
    pub word_gap_em: f32,
}

impl TitleLayout {
    /// Split on any whitespace; empty tokens vanish, order is kept.
    pub fn split(text: &str) -> Self {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(index, w)| Word {
                index,
                letters: w.chars().collect(),
            })
            .collect();
        Self { words }
    }

    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn letters(&self) -> impl Iterator<Item = LetterToken> + '_ {
        self.words.iter().flat_map(|w| {
            w.letters.iter().map(move |&letter| LetterToken {
                word_index: w.index,
                letter,
            })
        })
    }

    pub fn letter_count(&self) -> usize {
        self.words.iter().map(|w| w.letters.len()).sum()
    }

    /// Nested inline-block spans, words separated by a space plus a fixed gap.
    pub fn to_markup(&self, m: &TitleMarkup<'_>) -> String {
        let mut out = String::with_capacity(self.letter_count() * 64);
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(
                out,
                "<span class=\"{}\" style=\"display: inline-block; margin-right: {}em;\">",
                m.word_class, m.word_gap_em
            );
            for &c in &word.letters {
                let _ = write!(
                    out,
                    "<span class=\"{}\" style=\"display: inline-block;\">",
                    m.letter_class
                );
                push_escaped(&mut out, c);
                out.push_str("</span>");
            }
            out.push_str("</span>");
        }
        out
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: TitleMarkup<'static> = TitleMarkup {
        word_class: "hero-word",
        letter_class: "hero-letter",
        word_gap_em: 0.25,
    };

    #[test]
    fn collapses_whitespace_runs() {
        let t = TitleLayout::split("  Rent \n\t Smarter   ");
        assert_eq!(t.words().len(), 2);
        assert_eq!(t.words()[1].text(), "Smarter");
        assert_eq!(t.words()[1].index, 1);
    }

    #[test]
    fn empty_title_renders_nothing() {
        let t = TitleLayout::split("   ");
        assert_eq!(t.letter_count(), 0);
        assert_eq!(t.to_markup(&MARKUP), "");
    }

    #[test]
    fn markup_escapes_letters() {
        let t = TitleLayout::split("A<B");
        let html = t.to_markup(&MARKUP);
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<B"));
        assert_eq!(html.matches("class=\"hero-letter\"").count(), 3);
    }
}
