//! JSON transformer backed by serde_json
//!
//! Unlike the scan-based transformers, JSON goes through a real parse and
//! re-serialize, so both directions are lossless: the output parses to the
//! same value as the input, and key order is preserved.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::FormatError;
use crate::options::FormatOptions;

/// Re-serialize JSON with `indent_size` spaces per nesting level
///
/// Indentation is always spaces here; the serializer repeats a single indent
/// unit per level, so `use_tabs` has no distinct effect.
pub fn beautify(source: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let value = parse(source)?;
    let indent = " ".repeat(options.indent_size);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::Failed(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| FormatError::Failed(e.to_string()))
}

/// Re-serialize JSON with no inter-token whitespace
pub fn minify(source: &str) -> Result<String, FormatError> {
    let value = parse(source)?;
    serde_json::to_string(&value).map_err(|e| FormatError::Failed(e.to_string()))
}

fn parse(source: &str) -> Result<Value, FormatError> {
    serde_json::from_str(source).map_err(|e| FormatError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_indent(indent_size: usize) -> FormatOptions {
        FormatOptions {
            indent_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_beautify_indents_nesting() {
        let source = "{\"a\":{\"b\":[1,2]}}";
        let result = beautify(source, &options_with_indent(2)).unwrap();
        assert_eq!(result, "{\n  \"a\": {\n    \"b\": [\n      1,\n      2\n    ]\n  }\n}");
    }

    #[test]
    fn test_beautify_parses_back_to_same_value() {
        let source = "{\"a\":1,\"b\":[true,null,\"x\"],\"c\":{\"d\":2.5}}";
        for indent_size in [0, 2, 4, 8] {
            let pretty = beautify(source, &options_with_indent(indent_size)).unwrap();
            let original: Value = serde_json::from_str(source).unwrap();
            let round_tripped: Value = serde_json::from_str(&pretty).unwrap();
            assert_eq!(original, round_tripped);
        }
    }

    #[test]
    fn test_beautify_is_idempotent() {
        let source = "{\"outer\":{\"inner\":[1,2,3]},\"flag\":false}";
        let options = options_with_indent(4);
        let first = beautify(source, &options).unwrap();
        let second = beautify(&first, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_beautify_preserves_key_order() {
        let source = "{\"zebra\":1,\"apple\":2,\"mango\":3}";
        let result = beautify(source, &options_with_indent(2)).unwrap();
        let zebra = result.find("zebra").unwrap();
        let apple = result.find("apple").unwrap();
        let mango = result.find("mango").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn test_minify_strips_structural_whitespace() {
        let source = "{\n  \"a\": 1,\n  \"b\": \"keep  inner\"\n}";
        let result = minify(source).unwrap();
        assert_eq!(result, "{\"a\":1,\"b\":\"keep  inner\"}");
    }

    #[test]
    fn test_minify_round_trips_through_parse() {
        let source = "[1, 2, {\"k\": [null, false]}]";
        let minified = minify(source).unwrap();
        let original: Value = serde_json::from_str(source).unwrap();
        let round_tripped: Value = serde_json::from_str(&minified).unwrap();
        assert_eq!(original, round_tripped);
        assert!(minified.len() <= source.len());
    }

    #[test]
    fn test_invalid_json_carries_parser_diagnostic() {
        let err = beautify("{\"a\":}", &FormatOptions::default()).unwrap_err();
        match err {
            FormatError::InvalidJson(message) => assert!(!message.is_empty()),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }
}
