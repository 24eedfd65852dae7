//! SQL transformer
//!
//! Beautify upper-cases the whole statement and inserts a line break before
//! each clause keyword. Keywords are matched by word boundary with no string
//! awareness, so original case is lost, identifiers named like keywords are
//! split onto their own line, and literals containing keyword substrings are
//! not protected.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::FormatOptions;

/// Clause keywords in the order their break is applied. The order matters:
/// `JOIN` runs before `LEFT JOIN`, so qualified joins break between the
/// qualifier and `JOIN`.
const KEYWORDS: [&str; 13] = [
    "SELECT",
    "FROM",
    "WHERE",
    "JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "ORDER BY",
    "GROUP BY",
    "HAVING",
    "INSERT",
    "UPDATE",
    "DELETE",
];

static KEYWORD_BREAKS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = Regex::new(&format!(r"\b{keyword}\b")).expect("keyword pattern");
            (*keyword, pattern)
        })
        .collect()
});
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*").expect("line comment pattern"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

/// Strip comments and collapse whitespace
pub fn minify(source: &str) -> String {
    let stripped = LINE_COMMENT.replace_all(source, "");
    let stripped = BLOCK_COMMENT.replace_all(&stripped, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Upper-case and break the statement before each clause keyword
///
/// Continuation lines are indented by `indent_size` spaces; the first line is
/// not.
pub fn beautify(source: &str, options: &FormatOptions) -> String {
    let mut result = source.to_uppercase();
    for (keyword, pattern) in KEYWORD_BREAKS.iter() {
        result = pattern
            .replace_all(&result, format!("\n{keyword}"))
            .to_string();
    }

    let trimmed = result.trim();
    let collapsed = BLANK_LINES.replace_all(trimmed, "\n");
    let continuation = format!("\n{}", " ".repeat(options.indent_size));
    collapsed.replace('\n', &continuation)
}
