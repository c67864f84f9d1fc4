//! Greedy word-wrap by character count.
//!
//! This is a character-count approximation of line width, not a proportional-font
//! measurement. Callers correct for wide labels by shrinking `max_width`.

/// Wraps `text` into lines of at most `max_width` characters.
///
/// Words are whitespace-delimited and packed left to right; a word joins the
/// current line while `current + " " + word` still fits. A single word longer than
/// `max_width` is never broken and occupies a line of its own. Empty input yields
/// no lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
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

    const PARAGRAPH: &str = "The candidate demonstrates a consistent habit of reflecting on \
        outcomes before acting, and regularly invites feedback from peers across functions. \
        This pattern suggests readiness for roles that demand independent judgement.";

    #[test]
    fn test_wrap_empty_text_yields_no_lines() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("   ", 20).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(wrap_text("He is ready.", 90), vec!["He is ready."]);
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_one_line() {
        // "aaaa bbbb" is 9 chars.
        assert_eq!(wrap_text("aaaa bbbb", 9), vec!["aaaa bbbb"]);
        assert_eq!(wrap_text("aaaa bbbb", 8), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_wrap_lines_never_exceed_width() {
        for width in [20usize, 35, 60, 90] {
            for line in wrap_text(PARAGRAPH, width) {
                assert!(
                    line.chars().count() <= width,
                    "line {line:?} exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn test_wrap_preserves_word_sequence() {
        for width in [12usize, 30, 75] {
            let rejoined = wrap_text(PARAGRAPH, width).join(" ");
            let original: Vec<&str> = PARAGRAPH.split_whitespace().collect();
            let wrapped: Vec<&str> = rejoined.split_whitespace().collect();
            assert_eq!(original, wrapped, "words changed at width {width}");
        }
    }

    #[test]
    fn test_wrap_overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic word", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_wrap_overlong_first_word_emits_no_empty_line() {
        let lines = wrap_text("supercalifragilistic word", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "word"]);
        assert!(lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_wrap_collapses_repeated_whitespace() {
        assert_eq!(wrap_text("one  two\tthree", 90), vec!["one two three"]);
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // Each "é" is two bytes but one character.
        let lines = wrap_text("éééé éééé", 9);
        assert_eq!(lines, vec!["éééé éééé"]);
    }
}
