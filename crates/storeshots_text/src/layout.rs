//! Greedy word wrapping
//!
//! Text is split on whitespace and packed onto lines left to right. A word
//! joins the current line when the joined line still measures within the
//! width budget, or when the line is empty; a single word wider than the
//! budget therefore gets a line of its own and overflows.

use crate::font::Font;

/// Appended to the last kept line when lines are dropped
pub const ELLIPSIS: &str = "...";

/// Options for drawing a wrapped block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Width budget in pixels
    pub max_width: i32,
    /// Extra pixels between lines
    pub line_spacing: i32,
    /// Keep at most this many lines
    pub max_lines: Option<usize>,
}

impl LayoutOptions {
    pub fn new(max_width: i32) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    pub fn line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines);
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_width: i32::MAX,
            line_spacing: 6,
            max_lines: None,
        }
    }
}

/// The outcome of wrapping: the lines to draw and whether any were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    pub truncated: bool,
}

/// Wrap `text` into lines no wider than `max_width` when measured with
/// `font`, keeping at most `max_lines` lines.
///
/// When lines are dropped, trailing periods are stripped from the last kept
/// line and [`ELLIPSIS`] is appended. Empty or all-whitespace text yields no
/// lines.
pub fn wrap_text(text: &str, font: &Font, max_width: i32, max_lines: Option<usize>) -> WrappedText {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if current.is_empty() || font.measure(&trial).width as i64 <= max_width as i64 {
            current = trial;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut truncated = false;
    if let Some(limit) = max_lines {
        if lines.len() > limit {
            lines.truncate(limit);
            truncated = true;
            if let Some(last) = lines.last_mut() {
                let kept = last.trim_end_matches('.').len();
                last.truncate(kept);
                last.push_str(ELLIPSIS);
            }
        }
    }

    WrappedText { lines, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::BuiltinFont;
    use crate::resolver::{FontResolver, FontWeight};

    const ADV: i32 = BuiltinFont::ADVANCE as i32;

    fn wrap(text: &str, chars: i32, max_lines: Option<usize>) -> WrappedText {
        wrap_text(text, &Font::builtin(), chars * ADV, max_lines)
    }

    #[test]
    fn test_lines_fit_width() {
        let font = Font::builtin();
        let text = "Create and manage events with ticketing, sponsor slots and participant lists";
        let max_width = 20 * ADV;
        let wrapped = wrap_text(text, &font, max_width, None);
        assert!(wrapped.lines.len() > 1);
        for line in &wrapped.lines {
            assert!(font.measure(line).width as i32 <= max_width, "{line:?} too wide");
        }
        assert_eq!(wrapped.lines.join(" "), text);
        assert!(!wrapped.truncated);
    }

    #[test]
    fn test_long_word_overflows_on_its_own_line() {
        let wrapped = wrap("a supercalifragilistic b", 8, None);
        assert_eq!(wrapped.lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        let wrapped = wrap("abc def", 7, None);
        assert_eq!(wrapped.lines, vec!["abc def"]);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let wrapped = wrap("  one \t two\n three  ", 100, None);
        assert_eq!(wrapped.lines, vec!["one two three"]);
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        let wrapped = wrap("one two three four five six", 7, Some(2));
        assert_eq!(wrapped.lines, vec!["one two", "three..."]);
        assert!(wrapped.truncated);
    }

    #[test]
    fn test_truncation_strips_trailing_periods() {
        let wrapped = wrap("Done. Next.. More words here", 6, Some(2));
        assert_eq!(wrapped.lines, vec!["Done.", "Next..."]);
        assert!(wrapped.truncated);
    }

    #[test]
    fn test_no_truncation_at_limit() {
        let wrapped = wrap("one two three", 7, Some(2));
        assert_eq!(wrapped.lines, vec!["one two", "three"]);
        assert!(!wrapped.truncated);
    }

    #[test]
    fn test_empty_text() {
        assert!(wrap("", 10, Some(2)).lines.is_empty());
        assert!(wrap("   ", 10, None).lines.is_empty());
    }

    #[test]
    fn test_outline_font_lines_fit_width() {
        let font = FontResolver::new().resolve(28, FontWeight::Regular).font;
        if font.is_builtin() {
            println!("No outline fonts available - skipping test (CI environment)");
            return;
        }

        let text = "Publish schedules, sell tickets and keep every sponsor \
                    commitment visible to organizers at a glance";
        let max_width = 260;
        let wrapped = wrap_text(text, &font, max_width, Some(3));
        assert_eq!(wrapped.lines.len(), 3);
        assert!(wrapped.truncated);
        for line in &wrapped.lines[..2] {
            let single_word = !line.contains(' ');
            assert!(
                single_word || font.measure(line).width as i32 <= max_width,
                "{line:?} too wide"
            );
        }
        assert!(wrapped.lines[2].ends_with(ELLIPSIS));
    }
}
