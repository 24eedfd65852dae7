//! Polyfmt Core
//!
//! Beautify and minify small source snippets in five syntax families:
//! JSON, JavaScript, CSS, SQL, and XML. Each per-language transformer is an
//! independent pure function over the source text; the [`format`] dispatcher
//! routes on a language tag and an action.
//!
//! # Example
//!
//! ```
//! use polyfmt_core::{format, Action, FormatOptions, Language};
//!
//! let source = "{\"name\":\"polyfmt\",\"tags\":[1,2]}";
//! let options = FormatOptions::default();
//! let pretty = format(source, Language::Json, Action::Beautify, &options).unwrap();
//!
//! assert!(pretty.contains("  \"name\": \"polyfmt\""));
//! ```

pub mod css;
pub mod error;
pub mod format;
pub mod javascript;
pub mod json;
pub mod language;
pub mod options;
pub mod sql;
pub mod xml;

pub use error::FormatError;
pub use format::{format, needs_format};
pub use language::{Action, Language};
pub use options::{BracketStyle, FormatOptions};
