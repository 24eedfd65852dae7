//! Formatting options

/// Brace placement preference.
///
/// Accepted and carried through for API compatibility with callers that
/// expose it as a setting; no transformer currently changes behavior based on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketStyle {
    #[default]
    Collapse,
    Expand,
}

/// Options accepted by every transformer
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Number of spaces for indentation (default: 2)
    pub indent_size: usize,

    /// Use tabs instead of spaces for indentation
    pub use_tabs: bool,

    /// Brace placement preference (pass-through only)
    pub bracket_style: BracketStyle,

    /// Keep existing blank lines where possible (pass-through only)
    pub preserve_newlines: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
            bracket_style: BracketStyle::Collapse,
            preserve_newlines: true,
        }
    }
}

impl FormatOptions {
    /// Get the string to use for a single level of indentation
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FormatOptions::default();
        assert_eq!(options.indent_size, 2);
        assert!(!options.use_tabs);
        assert_eq!(options.bracket_style, BracketStyle::Collapse);
        assert!(options.preserve_newlines);
    }

    #[test]
    fn test_indent_unit_spaces() {
        let options = FormatOptions::default();
        assert_eq!(options.indent_unit(), "  ");
    }

    #[test]
    fn test_indent_unit_wider() {
        let options = FormatOptions {
            indent_size: 4,
            ..Default::default()
        };
        assert_eq!(options.indent_unit(), "    ");
    }

    #[test]
    fn test_indent_unit_tabs() {
        let options = FormatOptions {
            use_tabs: true,
            ..Default::default()
        };
        assert_eq!(options.indent_unit(), "\t");
    }
}
