//! Structural validation of raw input documents.
//!
//! Validation checks structural validity for the declared format, not just
//! well-formedness: a JSONX document that parses but carries no attribute
//! keys is reported invalid with a structural warning.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;
use tracing::debug;

use xst_model::{ATTRIBUTE_MARKER, DataFormat, ValidationResult};

/// Validate raw text against a declared format.
///
/// Empty or whitespace-only input yields `{is_valid: false, errors: [],
/// data_length: 0}`; absence of data is not reported as an error. For all
/// other inputs `data_length` is the character count of `raw`.
pub fn validate(raw: &str, format: DataFormat) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::empty_input();
    }

    let mut errors = Vec::new();
    if format.is_json_family() {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => {
                if format == DataFormat::Jsonx && !contains_attribute_key(&value) {
                    errors.push(format!(
                        "{} format should contain {} attributes for XML compatibility",
                        format.upper_name(),
                        ATTRIBUTE_MARKER
                    ));
                }
            }
            Err(error) => {
                errors.push(format!("{} Parse Error: {error}", format.upper_name()));
            }
        }
    } else if let Some(error) = first_xml_error(raw) {
        debug!(%error, "xml parse failed");
        errors.push("Invalid XML structure".to_string());
    }

    ValidationResult::from_errors(errors, raw.chars().count())
}

/// Recursively scan a parsed value for any object key starting with `@`.
pub fn contains_attribute_key(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.iter().any(|(key, child)| {
            key.starts_with(ATTRIBUTE_MARKER) || contains_attribute_key(child)
        }),
        Value::Array(items) => items.iter().any(contains_attribute_key),
        _ => false,
    }
}

fn first_xml_error(raw: &str) -> Option<quick_xml::Error> {
    let mut reader = Reader::from_str(raw);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => return None,
            Ok(_) => {}
            Err(error) => return Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_and_whitespace_input() {
        for raw in ["", "   ", "\n\t "] {
            let result = validate(raw, DataFormat::Json);
            assert!(!result.is_valid);
            assert!(result.errors.is_empty());
            assert_eq!(result.data_length, 0);
        }
    }

    #[test]
    fn valid_json_passes() {
        let result = validate(r#"{"data":[]}"#, DataFormat::Json);
        assert!(result.is_valid);
        assert_eq!(result.data_length, 11);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let result = validate("{\"a\":", DataFormat::Json);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("JSON Parse Error:"));
    }

    #[test]
    fn malformed_jsonx_uses_jsonx_prefix() {
        let result = validate("[1,", DataFormat::Jsonx);
        assert!(result.errors[0].starts_with("JSONX Parse Error:"));
    }

    #[test]
    fn jsonx_with_attribute_key_passes() {
        let result = validate(r#"{"@id":"1","name":"x"}"#, DataFormat::Jsonx);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn jsonx_without_attribute_key_gets_structural_warning() {
        let result = validate(r#"{"id":"1"}"#, DataFormat::Jsonx);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["JSONX format should contain @ attributes for XML compatibility".to_string()]
        );
    }

    #[test]
    fn jsonx_attribute_key_found_at_depth() {
        let result = validate(
            r#"{"users":[{"profile":{"@role":"admin"}}]}"#,
            DataFormat::Jsonx,
        );
        assert!(result.is_valid);
    }

    #[test]
    fn well_formed_xml_passes() {
        let result = validate("<root><a>1</a></root>", DataFormat::Xml);
        assert!(result.is_valid);
    }

    #[test]
    fn mismatched_xml_tags_fail() {
        let result = validate("<root><a>1</b></root>", DataFormat::Xml);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Invalid XML structure".to_string()]);
    }

    #[test]
    fn data_length_counts_chars_not_bytes() {
        let raw = r#"{"name":"héllo"}"#;
        let result = validate(raw, DataFormat::Json);
        assert_eq!(result.data_length, raw.chars().count());
        assert!(result.data_length < raw.len());
    }

    proptest! {
        #[test]
        fn data_length_matches_char_count(raw in "\\PC{1,64}") {
            prop_assume!(!raw.trim().is_empty());
            for format in DataFormat::ALL {
                let result = validate(&raw, format);
                prop_assert_eq!(result.data_length, raw.chars().count());
            }
        }

        #[test]
        fn validity_iff_no_errors(raw in "\\PC{0,64}") {
            for format in DataFormat::ALL {
                let result = validate(&raw, format);
                if raw.trim().is_empty() {
                    prop_assert!(!result.is_valid);
                    prop_assert!(result.errors.is_empty());
                } else {
                    prop_assert_eq!(result.is_valid, result.errors.is_empty());
                }
            }
        }
    }
}
