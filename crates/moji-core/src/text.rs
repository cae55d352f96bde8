//! Message text utilities: word splitting and formatting-tag stripping.
//!
//! Chat messages arrive with host markup embedded in the text (`<col=..>`,
//! `<u>`, recoloring wrappers) and with `<` / `>` characters escaped as the
//! literal sequences `<lt>` and `<gt>`. Trigger matching works on the text
//! with the markup removed but the escapes intact, while rewriting edits
//! the original token so surrounding markup survives.

/// The literal escape sequence for `<` in message markup.
pub const ESCAPED_LT: &str = "<lt>";

/// The literal escape sequence for `>` in message markup.
pub const ESCAPED_GT: &str = "<gt>";

/// Splits a message into words on whitespace.
///
/// `char::is_whitespace` already covers U+00A0, the non-breaking space
/// some chat clients insert. Empty words between consecutive separators
/// are kept, so rejoining with single spaces preserves the separator count
/// while normalizing every separator to a plain space.
pub fn split_words(message: &str) -> Vec<&str> {
    message.split(char::is_whitespace).collect()
}

/// Removes `<...>` formatting tags from a token, keeping the literal
/// [`ESCAPED_LT`] and [`ESCAPED_GT`] escape sequences intact.
///
/// An unterminated `<` starts no tag and is copied through verbatim.
pub fn strip_formatting_tags(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match after.find('>') {
            Some(end) => {
                let tag = &after[..=end];
                if tag == ESCAPED_LT || tag == ESCAPED_GT {
                    out.push_str(tag);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(after);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_words("monkaw pipe"), vec!["monkaw", "pipe"]);
    }

    #[test]
    fn test_split_on_non_breaking_space() {
        assert_eq!(split_words("hello\u{00A0}world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_split_keeps_empty_words() {
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        assert_eq!(split_words(" a"), vec!["", "a"]);
    }

    #[test]
    fn test_split_empty_message() {
        assert_eq!(split_words(""), vec![""]);
    }

    #[test]
    fn test_strip_removes_tags() {
        assert_eq!(strip_formatting_tags("<col=ff0000>pipe"), "pipe");
        assert_eq!(strip_formatting_tags("pipe</col>"), "pipe");
        assert_eq!(strip_formatting_tags("<u>pipe</u>"), "pipe");
    }

    #[test]
    fn test_strip_keeps_escapes() {
        assert_eq!(strip_formatting_tags("a<lt>b<gt>c"), "a<lt>b<gt>c");
        assert_eq!(strip_formatting_tags("<col=ff0000><lt>3"), "<lt>3");
    }

    #[test]
    fn test_strip_unterminated_bracket_is_verbatim() {
        assert_eq!(strip_formatting_tags("a<b"), "a<b");
        assert_eq!(strip_formatting_tags("<"), "<");
    }

    #[test]
    fn test_strip_tag_only_token_reduces_to_empty() {
        assert_eq!(strip_formatting_tags("<col=ff0000>"), "");
        assert_eq!(strip_formatting_tags("<u></u>"), "");
    }

    #[test]
    fn test_strip_plain_text_untouched() {
        assert_eq!(strip_formatting_tags("monkaw"), "monkaw");
    }
}
