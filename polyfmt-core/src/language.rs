//! Language tags and actions accepted by the dispatcher

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Syntax family a transformer operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Json,
    JavaScript,
    Css,
    Sql,
    Xml,
}

impl Language {
    /// Every supported language, in dispatch order
    pub const ALL: [Language; 5] = [
        Language::Json,
        Language::JavaScript,
        Language::Css,
        Language::Sql,
        Language::Xml,
    ];

    /// Canonical tag used on the `format` interface
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::JavaScript => "javascript",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Xml => "xml",
        }
    }

    /// File extensions conventionally holding this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Json => &["json"],
            Language::JavaScript => &["js", "mjs", "cjs"],
            Language::Css => &["css"],
            Language::Sql => &["sql"],
            Language::Xml => &["xml"],
        }
    }

    /// Map a file extension (without the dot) to a language
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Language::Json),
            "javascript" => Ok(Language::JavaScript),
            "css" => Ok(Language::Css),
            "sql" => Ok(Language::Sql),
            "xml" => Ok(Language::Xml),
            other => Err(FormatError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Whether to expand the source for readability or compact it for size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Beautify,
    Minify,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Beautify => f.write_str("beautify"),
            Action::Minify => f.write_str("minify"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.tag().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = "yaml".parse::<Language>().unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedLanguage(tag) if tag == "yaml"));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("json"), Some(Language::Json));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("CSS"), Some(Language::Css));
        assert_eq!(Language::from_extension("txt"), None);
    }
}
