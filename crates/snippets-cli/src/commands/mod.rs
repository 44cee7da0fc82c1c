use std::borrow::Cow;

pub mod catalog;
pub mod get;
pub mod put;
pub mod search;

/// Render `text` on a single output line
///
/// Line breaks become `\n` / `\r` and backslashes are doubled, so a listing
/// prints exactly one line per entry and the escaping can be reversed.
pub fn one_line(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_leaves_plain_text_borrowed() {
        assert!(matches!(one_line("the quick fox"), Cow::Borrowed("the quick fox")));
    }

    #[test]
    fn test_one_line_escapes_line_breaks() {
        assert_eq!(one_line("line1\nneedle"), r"line1\nneedle");
        assert_eq!(one_line("crlf\r\nend"), r"crlf\r\nend");
    }

    #[test]
    fn test_one_line_doubles_backslashes() {
        assert_eq!(one_line(r"c:\tmp"), r"c:\\tmp");
        assert_eq!(one_line("a\\nb"), r"a\\nb");
    }
}
