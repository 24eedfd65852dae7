//! XML transformer
//!
//! A bracket-counting heuristic, not a parser. Every `<...>` run is treated
//! as a tag: depth drops on `</`, and rises after the `>` of an opening tag
//! (one not starting with `</`, `<?`, or `<!` and not ending `/>`). Text
//! directly after an opening tag stays on the tag's line; closing tags always
//! start their own line. Attribute values or CDATA containing angle brackets
//! will misindent the remainder.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::FormatOptions;

static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("inter-tag pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Collapse whitespace between and inside tags
pub fn minify(source: &str) -> String {
    let joined = BETWEEN_TAGS.replace_all(source, "><");
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    collapsed.trim().to_string()
}

/// Re-indent tags one element per line
pub fn beautify(source: &str, options: &FormatOptions) -> String {
    let unit = options.indent_unit();
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut depth: usize = 0;
    let mut in_tag = false;
    let mut tag_closes_or_declares = false;

    for i in 0..chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '<' {
            in_tag = true;
            tag_closes_or_declares = matches!(next, Some('/') | Some('?') | Some('!'));
            if next == Some('/') {
                depth = depth.saturating_sub(1);
                out.push('\n');
                push_indent(&mut out, &unit, depth);
            } else if !out.trim().is_empty() {
                out.push('\n');
                push_indent(&mut out, &unit, depth);
            }
        }

        out.push(c);

        if c == '>' && in_tag {
            in_tag = false;
            let self_closing = i > 0 && chars[i - 1] == '/';
            if !tag_closes_or_declares && !self_closing {
                depth += 1;
            }
        }
    }

    out.trim().to_string()
}

fn push_indent(out: &mut String, unit: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_joins_tags() {
        let source = "<a>\n  <b>x</b>\n</a>";
        assert_eq!(minify(source), "<a><b>x</b></a>");
    }

    #[test]
    fn test_minify_collapses_text_whitespace() {
        assert_eq!(minify("<a>some\n   text</a>"), "<a>some text</a>");
    }

    #[test]
    fn test_beautify_nests_elements() {
        let result = beautify("<a><b>x</b></a>", &FormatOptions::default());
        assert_eq!(result, "<a>\n  <b>x\n  </b>\n</a>");
    }

    #[test]
    fn test_beautify_self_closing_does_not_indent() {
        let result = beautify("<a><b/><c/></a>", &FormatOptions::default());
        assert_eq!(result, "<a>\n  <b/>\n  <c/>\n</a>");
    }

    #[test]
    fn test_beautify_declaration_does_not_indent() {
        let result = beautify("<?xml version=\"1.0\"?><root><leaf/></root>", &FormatOptions::default());
        assert_eq!(
            result,
            "<?xml version=\"1.0\"?>\n<root>\n  <leaf/>\n</root>"
        );
    }

    #[test]
    fn test_beautify_text_stays_inline_with_opening_tag() {
        let result = beautify("<p>hello world</p>", &FormatOptions::default());
        assert_eq!(result, "<p>hello world\n</p>");
    }

    #[test]
    fn test_minify_then_beautify_normalizes() {
        let options = FormatOptions::default();
        let ragged = "<a>\n      <b>x</b>\n</a>";
        let result = beautify(&minify(ragged), &options);
        assert_eq!(result, "<a>\n  <b>x\n  </b>\n</a>");
    }
}
