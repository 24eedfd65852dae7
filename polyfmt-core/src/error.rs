//! Error taxonomy for formatting operations

use thiserror::Error;

/// Errors surfaced by the dispatcher and the transformers
///
/// Formatting is deterministic, so none of these are worth retrying; the
/// message is meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The source was empty or whitespace-only
    #[error("No code provided")]
    EmptyInput,

    /// The language tag is not one of the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// JSON source failed to parse; carries the parser's diagnostic
    #[error("Invalid JSON syntax: {0}")]
    InvalidJson(String),

    /// Any other failure raised inside a transformer
    #[error("Formatting failed: {0}")]
    Failed(String),
}
