//! Formatter dispatcher

use crate::error::FormatError;
use crate::language::{Action, Language};
use crate::options::FormatOptions;
use crate::{css, javascript, json, sql, xml};

/// Format source text in the given language
///
/// Empty or whitespace-only input is rejected before any transformer runs.
/// Transformer failures propagate unchanged; each call is stateless.
pub fn format(
    source: &str,
    language: Language,
    action: Action,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    if source.trim().is_empty() {
        return Err(FormatError::EmptyInput);
    }

    match (language, action) {
        (Language::Json, Action::Beautify) => json::beautify(source, options),
        (Language::Json, Action::Minify) => json::minify(source),
        (Language::JavaScript, Action::Beautify) => Ok(javascript::beautify(source, options)),
        (Language::JavaScript, Action::Minify) => Ok(javascript::minify(source)),
        (Language::Css, Action::Beautify) => Ok(css::beautify(source, options)),
        (Language::Css, Action::Minify) => Ok(css::minify(source)),
        (Language::Sql, Action::Beautify) => Ok(sql::beautify(source, options)),
        (Language::Sql, Action::Minify) => Ok(sql::minify(source)),
        (Language::Xml, Action::Beautify) => Ok(xml::beautify(source, options)),
        (Language::Xml, Action::Minify) => Ok(xml::minify(source)),
    }
}

/// Check whether beautifying would change the source
pub fn needs_format(
    source: &str,
    language: Language,
    options: &FormatOptions,
) -> Result<bool, FormatError> {
    let formatted = format(source, language, Action::Beautify, options)?;
    Ok(formatted != source)
}
