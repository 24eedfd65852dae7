//! CSS transformer
//!
//! Minify is a fixed sequence of regex passes; beautify is a character scan
//! keyed on `{`, `}`, and `;`. Neither understands comments, nested
//! selectors, or at-rules beyond their braces: comments are only stripped
//! during minify, never reformatted during beautify, and whitespace already
//! present before an opening brace is carried through by beautify.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::FormatOptions;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static SEMI_BEFORE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*\}").expect("closing brace pattern"));
static AROUND_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\{\s*").expect("opening brace pattern"));
static AFTER_SEMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*").expect("semicolon pattern"));
static AFTER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*").expect("colon pattern"));

/// Strip comments and squeeze out structural whitespace
pub fn minify(source: &str) -> String {
    let stripped = COMMENT.replace_all(source, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let s = SEMI_BEFORE_CLOSE.replace_all(&collapsed, ";}");
    let s = AROUND_OPEN.replace_all(&s, "{");
    let s = AFTER_SEMI.replace_all(&s, ";");
    let s = AFTER_COLON.replace_all(&s, ":");
    s.trim().to_string()
}

/// Re-indent rules one declaration per line
pub fn beautify(source: &str, options: &FormatOptions) -> String {
    let unit = options.indent_unit();
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut depth: usize = 0;

    for i in 0..chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match c {
            '{' => {
                out.push_str(" {\n");
                depth += 1;
                push_indent(&mut out, &unit, depth);
            }
            '}' => {
                out = out.trim().to_string();
                out.push('\n');
                depth = depth.saturating_sub(1);
                push_indent(&mut out, &unit, depth);
                out.push_str("}\n\n");
                if next.is_some() {
                    push_indent(&mut out, &unit, depth);
                }
            }
            ';' => {
                out.push_str(";\n");
                push_indent(&mut out, &unit, depth);
            }
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}

fn push_indent(out: &mut String, unit: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(unit);
    }
}
