// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;

/// Convert the two-character escape sequence `\` + `n` into a literal newline.
///
/// Callers often source their text from places where a real newline cannot be
/// expressed (CLI args, single-line config values), so the escaped form is accepted
/// at the boundary. The step generator and the playback machine only ever operate on
/// the already-normalized form.
#[must_use]
pub fn normalize_text(text: &str) -> InlineString { text.replace("\\n", "\n").into() }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::normalize_text;

    #[test]
    fn test_escaped_newline_becomes_literal() {
        assert_eq!(normalize_text("안녕\\n하세요").as_str(), "안녕\n하세요");
    }

    #[test]
    fn test_literal_newline_is_untouched() {
        assert_eq!(normalize_text("안녕\n하세요").as_str(), "안녕\n하세요");
    }

    #[test]
    fn test_multiple_escapes() {
        assert_eq!(normalize_text("a\\nb\\nc").as_str(), "a\nb\nc");
    }

    #[test]
    fn test_text_without_escapes_passes_through() {
        assert_eq!(normalize_text("hello 안녕").as_str(), "hello 안녕");
        assert_eq!(normalize_text("").as_str(), "");
    }
}
