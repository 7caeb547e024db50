//! Length-preserving redaction of regions that must never be matched
//!
//! Passes run in a fixed order, each over the output of the previous one:
//! fenced code blocks, a leading front-matter block, tags, link brackets.
//! Masked characters become spaces of the same UTF-8 width; line breaks are
//! kept so line structure survives.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.+?```").expect("invalid fenced code regex"));

/// Only at the very start of the text, after optional blank lines.
static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[\r\n]*---(?s:.+?)---").expect("invalid front matter regex"));

/// `#tag`, `##tag`, `#sport/football`
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+[\w/-]+").expect("invalid tag regex"));

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]+").expect("invalid link regex"));

/// Blank out code, front matter, tags and links in `text`.
///
/// The result has exactly the byte length of `text`, so spans computed on it
/// index the original text directly. Total over all input: an unterminated
/// fence or front-matter block simply does not match.
///
/// # Example
///
/// ```
/// use autolink_engine::search::redact::redact;
///
/// assert_eq!(redact("I love playing #football"), "I love playing          ");
/// ```
pub fn redact(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in [&*FENCED_CODE, &*FRONT_MATTER, &*TAG, &*LINK] {
        out = pattern
            .replace_all(&out, |caps: &Captures<'_>| blank(&caps[0]))
            .into_owned();
    }
    debug_assert_eq!(out.len(), text.len());
    out
}

fn blank(region: &str) -> String {
    let mut masked = String::with_capacity(region.len());
    for c in region.chars() {
        match c {
            '\n' | '\r' => masked.push(c),
            _ => masked.extend(std::iter::repeat(' ').take(c.len_utf8())),
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtags_redacted() {
        assert_eq!(
            redact("I love playing #football"),
            "I love playing          "
        );
    }

    #[test]
    fn test_hierarchical_hashtags_redacted() {
        assert_eq!(
            redact("I love playing #sport/football"),
            "I love playing                "
        );
    }

    #[test]
    fn test_heading_is_not_a_tag() {
        assert_eq!(redact("# Heading 1"), "# Heading 1");
    }

    #[test]
    fn test_links_redacted() {
        assert_eq!(
            redact("I love [[sleeping]] and [[https://aoe.com|gaming]]"),
            "I love              and                           "
        );
    }

    #[test]
    fn test_code_blocks_redacted() {
        assert_eq!(redact("```cs\ncode block\n```"), "     \n          \n   ");
    }

    #[test]
    fn test_unterminated_fence_untouched() {
        assert_eq!(redact("```cs\ncode block"), "```cs\ncode block");
    }

    #[test]
    fn test_front_matter_redacted() {
        let text = "---\ntags: [aoe, aoe2]\n---\n# Heading 1\n";
        let expected = "   \n                 \n   \n# Heading 1\n";
        assert_eq!(redact(text), expected);
    }

    #[test]
    fn test_front_matter_after_blank_lines() {
        let text = "\n\n---\ntags: [aoe, aoe2]\n---\n# Heading 1\n";
        let expected = "\n\n   \n                 \n   \n# Heading 1\n";
        assert_eq!(redact(text), expected);
    }

    #[test]
    fn test_front_matter_only_at_start() {
        let text = "intro\n---\ntitle: x\n---\n";
        assert_eq!(redact(text), text);
    }

    #[test]
    fn test_multibyte_width_preserved() {
        let text = "voir #café et [[été]]";
        let redacted = redact(text);
        assert_eq!(redacted.len(), text.len());
        assert!(redacted.starts_with("voir "));
        assert!(redacted.contains(" et "));
        assert!(redacted.trim_end().ends_with("et"));
    }

    #[test]
    fn test_empty_and_plain_text() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("nothing to hide"), "nothing to hide");
    }
}
