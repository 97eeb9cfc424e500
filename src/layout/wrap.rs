use crate::layout::LayoutConfig;
use crate::units::{Mm, Pt};

/// The most characters that fit in `available` at `size`, estimated from the
/// average glyph width and never less than `min_chars_per_line`.
pub fn max_chars_per_line(config: &LayoutConfig, available: Mm, size: Pt) -> usize {
    let char_width = config.char_width(size);
    let estimate = if char_width.0 > 0.0 {
        (available.0 / char_width.0).floor().max(0.0) as usize
    } else {
        usize::MAX
    };
    estimate.max(config.min_chars_per_line)
}

/// Greedily packs the whitespace-separated words of `text` into lines of at
/// most `max_chars` characters. A word longer than `max_chars` gets a line of
/// its own and is left to overflow; words are never split.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let needed = if line.is_empty() {
            word_chars
        } else {
            line_chars + 1 + word_chars
        };

        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_chars = word_chars;
        } else {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_chars = needed;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Wraps `text` to the width left over by `indent` at the given font size
pub fn wrap_text(config: &LayoutConfig, text: &str, indent: Mm, size: Pt) -> Vec<String> {
    let max_chars = max_chars_per_line(config, config.available_width(indent), size);
    wrap_words(text, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_words_up_to_the_bound() {
        let lines = wrap_words("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);

        let lines = wrap_words("aaa bbb ccc", 8);
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn long_words_overflow_instead_of_splitting() {
        let lines = wrap_words("tiny enormouslylongword end", 6);
        assert_eq!(lines, vec!["tiny", "enormouslylongword", "end"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let lines = wrap_words("  a \t b\u{3000}c  ", 80);
        assert_eq!(lines, vec!["a b c"]);
        assert!(wrap_words(" \t ", 80).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let lines = wrap_words("héé héé", 7);
        assert_eq!(lines, vec!["héé héé"]);
    }

    #[test]
    fn rewrapping_a_wrapped_line_is_identity() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
        for line in wrap_words(&text, 37) {
            assert!(line.chars().count() <= 37);
            assert_eq!(wrap_words(&line, 37), vec![line.clone()]);
        }
    }

    #[test]
    fn narrow_columns_keep_a_minimum_width() {
        let config = LayoutConfig::default();
        assert_eq!(max_chars_per_line(&config, Mm(5.0), Pt(11.0)), 20);
    }

    #[test]
    fn bound_scales_with_font_size() {
        let config = LayoutConfig::default();
        // 170mm / (0.18 * 10pt) = 94.4
        assert_eq!(max_chars_per_line(&config, Mm(170.0), Pt(10.0)), 94);
        // 170mm / (0.18 * 20pt) = 47.2
        assert_eq!(max_chars_per_line(&config, Mm(170.0), Pt(20.0)), 47);
    }
}
