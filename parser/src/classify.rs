//! Line classification.
//!
//! Each non-blank line either opens a nested block or carries one
//! key/value pair. Block headers are lines whose trimmed text ends
//! with `:`, plus the depth-0 object markers such as `Sink #0` — a
//! `#`-containing, colon-free token. Everything else is a leaf.
//!
//! Indentation is the raw count of leading whitespace characters;
//! `pactl` indents consistently (tabs for block levels), so no
//! tab-width normalization is applied.

/// Classification of one report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty or whitespace-only; skipped.
    Blank,
    /// Opens a nested block under `key` (trailing `:` already removed).
    BlockHeader { key: &'a str },
    /// A key/value pair. `value` is the text after the first `": "` or
    /// `" = "` separator; `None` when there is no separator or nothing
    /// follows it.
    Leaf {
        key: &'a str,
        value: Option<&'a str>,
    },
}

/// Returns the indentation depth and classification of `line`.
pub(crate) fn classify(line: &str) -> (usize, LineKind<'_>) {
    let indent = line.chars().take_while(|ch| ch.is_whitespace()).count();
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return (indent, LineKind::Blank);
    }

    let depth_zero_marker = indent == 0 && trimmed.contains('#') && !trimmed.contains(':');
    if depth_zero_marker || trimmed.ends_with(':') {
        let key = trimmed.strip_suffix(':').unwrap_or(trimmed);
        return (indent, LineKind::BlockHeader { key });
    }

    let (key, value) = split_key_value(trimmed);
    (indent, LineKind::Leaf { key, value })
}

/// Splits a leaf line on the first `": "` or `" = "` separator,
/// whichever occurs earliest.
fn split_key_value(trimmed: &str) -> (&str, Option<&str>) {
    let colon = trimmed.find(": ").map(|idx| (idx, 2));
    let equals = trimmed.find(" = ").map(|idx| (idx, 3));
    let separator = match (colon, equals) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    match separator {
        Some((idx, len)) => {
            let value = &trimmed[idx + len..];
            let value = (!value.is_empty()).then_some(value);
            (&trimmed[..idx], value)
        }
        None => (trimmed, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), (0, LineKind::Blank));
        assert_eq!(classify("   "), (3, LineKind::Blank));
    }

    #[test]
    fn test_depth_zero_object_marker_is_a_header() {
        let (indent, kind) = classify("Sink #0");
        assert_eq!(indent, 0);
        assert_eq!(kind, LineKind::BlockHeader { key: "Sink #0" });
    }

    #[test]
    fn test_marker_with_colon_is_not_a_header() {
        let (_, kind) = classify("window #3: foo");
        assert_eq!(
            kind,
            LineKind::Leaf {
                key: "window #3",
                value: Some("foo")
            }
        );
    }

    #[test]
    fn test_trailing_colon_opens_a_block_at_any_depth() {
        let (indent, kind) = classify("\tProperties:");
        assert_eq!(indent, 1);
        assert_eq!(
            kind,
            LineKind::BlockHeader {
                key: "Properties"
            }
        );
    }

    #[test]
    fn test_leaf_with_colon_separator() {
        let (indent, kind) = classify("\tState: RUNNING");
        assert_eq!(indent, 1);
        assert_eq!(
            kind,
            LineKind::Leaf {
                key: "State",
                value: Some("RUNNING")
            }
        );
    }

    #[test]
    fn test_leaf_with_equals_separator() {
        let (_, kind) = classify("\t\tdevice.api = \"alsa\"");
        assert_eq!(
            kind,
            LineKind::Leaf {
                key: "device.api",
                value: Some("\"alsa\"")
            }
        );
    }

    #[test]
    fn test_earliest_separator_wins() {
        let (_, kind) = classify("a: b = c");
        assert_eq!(
            kind,
            LineKind::Leaf {
                key: "a",
                value: Some("b = c")
            }
        );
    }

    #[test]
    fn test_leaf_without_separator_has_no_value() {
        let (_, kind) = classify("\tbalance 0.00");
        assert_eq!(
            kind,
            LineKind::Leaf {
                key: "balance 0.00",
                value: None
            }
        );
    }

    #[test]
    fn test_indent_counts_raw_whitespace_chars() {
        let (indent, _) = classify("\t\tMute: no");
        assert_eq!(indent, 2);
        let (indent, _) = classify("    Mute: no");
        assert_eq!(indent, 4);
    }
}
