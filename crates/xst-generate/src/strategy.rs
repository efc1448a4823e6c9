//! Strategy selection and the generation entry point.

use tracing::debug;

use xst_model::{DataFormat, GeneratedArtifact, MappingRule, OutputFormat, TransformationConfig};

use crate::common;
use crate::{json_to_jsonx, json_to_xml, xml_to_json, xml_to_jsonx};

/// Inputs shared by every strategy.
pub struct TemplateContext<'a> {
    pub config: &'a TransformationConfig,
    pub rules: &'a [MappingRule],
}

/// One generation strategy: pure function from context to template text.
pub type Strategy = fn(&TemplateContext<'_>) -> String;

const STRATEGIES: &[((DataFormat, OutputFormat), Strategy)] = &[
    ((DataFormat::Json, OutputFormat::Xml), json_to_xml::emit),
    ((DataFormat::Xml, OutputFormat::Json), xml_to_json::emit),
    ((DataFormat::Json, OutputFormat::Jsonx), json_to_jsonx::emit),
    ((DataFormat::Xml, OutputFormat::Jsonx), xml_to_jsonx::emit),
];

/// Look up the strategy for a format pair.
///
/// Pairs without a dedicated strategy (CSV targets, JSONX sources,
/// identity pairs) fall back to the JSON-to-XML strategy, matching the
/// permissive selection the UI relies on.
pub fn strategy_for(source: DataFormat, target: OutputFormat) -> Strategy {
    // JSONX input is a JSON document; its strategies are the JSON ones.
    let source = match source {
        DataFormat::Jsonx => DataFormat::Json,
        other => other,
    };
    STRATEGIES
        .iter()
        .find(|((s, t), _)| *s == source && *t == target)
        .map(|(_, strategy)| *strategy)
        .unwrap_or_else(|| {
            debug!(%source, %target, "no dedicated strategy, using json->xml fallback");
            json_to_xml::emit
        })
}

/// Generate a template artifact. Pure and deterministic in its text:
/// identical inputs produce byte-identical `template` contents.
pub fn generate(
    source: DataFormat,
    config: &TransformationConfig,
    rules: &[MappingRule],
) -> GeneratedArtifact {
    let context = TemplateContext { config, rules };
    let strategy = strategy_for(source, config.output_format);
    let template = strategy(&context);
    GeneratedArtifact::new(template, source, config.output_format)
}

/// Minimal valid empty-root template, used when input cannot be
/// structurally walked. Never an error; the caller decides whether to warn.
pub fn fallback_template(config: &TransformationConfig) -> String {
    let mut out = common::stylesheet_open(config, &[]);
    out.push_str(&common::output_directive(config, "xml"));
    out.push_str("  <xsl:template match=\"/\">\n");
    out.push_str(&format!("    <{0}/>\n", config.root_element));
    out.push_str("  </xsl:template>\n\n");
    out.push_str(common::stylesheet_close());
    out
}
