//! JSON with comments.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

// String literals come first in the alternation so that `//` or `/*` inside
// a string is consumed as part of the string and put back unchanged.
static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"("(?:\\.|[^"\\])*")|//[^\n]*|/\*[\s\S]*?\*/"#)
        .expect("comment pattern is a valid regex")
});

/// Remove `// line` and `/* block */` comments from a JSON document.
///
/// Comment markers inside string literals are left alone.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_PATTERN.replace_all(text, "$1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comments() {
        let text = "[ // steps\n  1, // one\n  2\n]";
        assert_eq!(strip_comments(text), "[ \n  1, \n  2\n]");
    }

    #[test]
    fn strips_block_comments_across_lines() {
        let text = "[/* first\n   second */ true /**/]";
        assert_eq!(strip_comments(text), "[ true ]");
    }

    #[test]
    fn keeps_markers_inside_strings() {
        let text = r#"{"url": "https://example.com/*x*/", "k": 1} // tail"#;
        assert_eq!(
            strip_comments(text),
            r#"{"url": "https://example.com/*x*/", "k": 1} "#
        );
    }

    #[test]
    fn escaped_quotes_do_not_end_a_string() {
        let text = r#"["say \"hi\" // not a comment"]"#;
        assert_eq!(strip_comments(text), text);
    }

    #[test]
    fn plain_json_passes_through() {
        let text = r#"[{"type": "confirm", "key": "ok", "title": "Ok?"}]"#;
        assert_eq!(strip_comments(text), text);
    }
}
