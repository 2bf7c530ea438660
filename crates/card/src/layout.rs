//! Card geometry and word wrapping.

use crate::canvas::TextAlign;

/// Card width in pixels
pub const CARD_WIDTH: u32 = 1080;
/// Card height in pixels
pub const CARD_HEIGHT: u32 = 1080;

/// Quote text size relative to the editor font size
pub const QUOTE_SCALE: f32 = 3.2;
/// Author text size relative to the editor font size
pub const AUTHOR_SCALE: f32 = 2.4;
/// Distance between quote baselines relative to the quote text size
pub const LINE_SPACING: f32 = 1.3;

/// First quote baseline as a fraction of the height
pub const QUOTE_TOP: f32 = 0.35;
/// Author baseline as a fraction of the height
pub const AUTHOR_TOP: f32 = 0.72;

/// Watermark text
pub const WATERMARK: &str = "DilSe Quotes";
/// Watermark text size in pixels
pub const WATERMARK_SIZE: f32 = 28.0;
/// Watermark distance from the right and bottom edges
pub const WATERMARK_MARGIN: f32 = 40.0;

/// Horizontal anchor of the text block for an alignment.
#[must_use]
pub fn anchor_x(align: TextAlign, width: u32) -> f32 {
    let width = width as f32;
    match align {
        TextAlign::Start => width * 0.15,
        TextAlign::Center => width * 0.5,
        TextAlign::End => width * 0.85,
    }
}

/// Maximum line width for an alignment.
///
/// Centred text gets more room since it is padded evenly on both sides.
#[must_use]
pub fn wrap_budget(align: TextAlign, width: u32) -> f32 {
    let width = width as f32;
    match align {
        TextAlign::Center => width * 0.8,
        TextAlign::Start | TextAlign::End => width * 0.7,
    }
}

/// Greedy word wrap.
///
/// Words are appended to the current line while `measure` of the line stays
/// within `budget`; a word that would overflow starts a new line. Words are
/// never split, so a single word wider than the budget occupies a line of
/// its own.
pub fn wrap_words<F>(text: &str, budget: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) > budget {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn by_chars(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_anchor_and_budget() {
        assert_eq!(anchor_x(TextAlign::Start, 1000), 150.0);
        assert_eq!(anchor_x(TextAlign::Center, 1000), 500.0);
        assert_eq!(anchor_x(TextAlign::End, 1000), 850.0);
        assert_eq!(wrap_budget(TextAlign::Center, 1000), 800.0);
        assert_eq!(wrap_budget(TextAlign::Start, 1000), 700.0);
        assert_eq!(wrap_budget(TextAlign::End, 1000), 700.0);
    }

    #[test]
    fn test_wrap_basic() {
        let lines = wrap_words("aaa bbb ccc ddd", 70.0, by_chars);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_long_word_stands_alone() {
        let lines = wrap_words("hi extraordinarily ok", 50.0, by_chars);
        assert_eq!(lines, vec!["hi", "extraordinarily", "ok"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap_words("  one\n two\tthree  ", 1000.0, by_chars);
        assert_eq!(lines, vec!["one two three"]);
        assert!(wrap_words("   ", 100.0, by_chars).is_empty());
    }

    proptest! {
        #[test]
        fn prop_wrap_never_splits_words(
            words in prop::collection::vec("[a-z]{1,12}", 1..40),
            budget in 20.0f32..400.0,
        ) {
            let text = words.join(" ");
            let lines = wrap_words(&text, budget, by_chars);

            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
        }

        #[test]
        fn prop_wrap_respects_budget(
            words in prop::collection::vec("[a-z]{1,12}", 1..40),
            budget in 20.0f32..400.0,
        ) {
            let text = words.join(" ");
            for line in wrap_words(&text, budget, by_chars) {
                let lone_word = !line.contains(' ');
                prop_assert!(by_chars(&line) <= budget || lone_word);
            }
        }
    }
}
