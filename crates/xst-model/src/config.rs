//! Transformation output configuration.

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Configuration for one template generation run.
///
/// `output_format` selects the generation strategy; the remaining fields
/// tune the emitted header and whitespace directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformationConfig {
    pub output_format: OutputFormat,
    pub root_element: String,
    pub encoding: String,
    pub xslt_version: String,
    /// Emit the XML declaration prolog.
    pub include_declaration: bool,
    /// Embed `indent="yes"` in the output directive.
    pub pretty_print: bool,
    /// Emit the metadata copy block when the source carries a metadata node.
    pub include_metadata: bool,
    pub error_handling: bool,
    pub optimize: bool,
    /// Emit explanatory comments, including the mapping-rule summary.
    pub generate_comments: bool,
    pub custom_namespace: Option<String>,
}

impl Default for TransformationConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Xml,
            root_element: "root".to_string(),
            encoding: "UTF-8".to_string(),
            xslt_version: "2.0".to_string(),
            include_declaration: true,
            pretty_print: true,
            include_metadata: false,
            error_handling: true,
            optimize: false,
            generate_comments: true,
            custom_namespace: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = TransformationConfig::default();
        assert_eq!(config.output_format, OutputFormat::Xml);
        assert_eq!(config.root_element, "root");
        assert_eq!(config.encoding, "UTF-8");
        assert_eq!(config.xslt_version, "2.0");
        assert!(config.include_declaration);
        assert!(config.pretty_print);
        assert!(!config.include_metadata);
        assert!(config.generate_comments);
        assert!(config.custom_namespace.is_none());
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let config: TransformationConfig =
            serde_json::from_str(r#"{"outputFormat":"jsonx","rootElement":"catalog"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Jsonx);
        assert_eq!(config.root_element, "catalog");
        assert_eq!(config.encoding, "UTF-8");
        assert!(config.pretty_print);
    }
}
