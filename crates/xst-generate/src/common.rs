//! Shared emission helpers for the generation strategies.
//!
//! Every strategy opens the same way (declaration, stylesheet element,
//! output directive, optional rule comments) and draws its structural
//! predicates from the constants here.

use std::fmt::Write as _;

use xst_model::{MappingRule, TransformationConfig};

pub const XSL_NS: &str = "http://www.w3.org/1999/XSL/Transform";
pub const FN_NS: &str = "http://www.w3.org/2005/xpath-functions";
pub const JSONX_NS: &str = "http://www.ibm.com/xmlns/prod/2009/jsonx";

/// XPath test: the text value round-trips losslessly through number().
pub const NUMERIC_TEST: &str = "number(.) = number(.) and string(number(.)) = string(.)";
/// XPath test: the text value is a boolean literal.
pub const BOOLEAN_TEST: &str = ". = 'true' or . = 'false'";
/// Match predicate: this node belongs to a sibling run of two or more
/// same-named elements, treated as one array.
pub const SIBLING_RUN_MATCH: &str = "*[count(../*[local-name() = local-name(current())]) > 1]";

/// Declaration prolog plus the opening `<xsl:stylesheet>` tag.
///
/// `extra_namespaces` are (prefix, uri) pairs appended after the XSL
/// namespace; the configured custom namespace comes last.
pub fn stylesheet_open(
    config: &TransformationConfig,
    extra_namespaces: &[(&str, &str)],
) -> String {
    let mut out = String::new();
    if config.include_declaration {
        let _ = writeln!(
            out,
            "<?xml version=\"1.0\" encoding=\"{}\"?>",
            config.encoding
        );
    }
    let _ = write!(
        out,
        "<xsl:stylesheet version=\"{}\"\n  xmlns:xsl=\"{XSL_NS}\"",
        config.xslt_version
    );
    for (prefix, uri) in extra_namespaces {
        let _ = write!(out, "\n  xmlns:{prefix}=\"{uri}\"");
    }
    if let Some(uri) = &config.custom_namespace
        && !uri.trim().is_empty()
    {
        let _ = write!(out, "\n  xmlns:custom=\"{}\"", uri.trim());
    }
    out.push_str(">\n\n");
    out
}

/// The `<xsl:output>` directive. Indentation is a whitespace instruction
/// only; it never changes structure.
pub fn output_directive(config: &TransformationConfig, method: &str) -> String {
    let indent = if config.pretty_print {
        " indent=\"yes\""
    } else {
        ""
    };
    format!(
        "  <xsl:output method=\"{method}\" encoding=\"{}\"{indent}/>\n\n",
        config.encoding
    )
}

/// Comment block summarizing the mapping rules, when comments are enabled.
///
/// Rules are informational context here; the structural templates do not
/// depend on them. Paths and conditions are free-form user text, so each
/// line passes through [`comment_text`].
pub fn rules_comment(config: &TransformationConfig, rules: &[MappingRule]) -> String {
    if !config.generate_comments || rules.is_empty() {
        return String::new();
    }
    let mut out = String::from("  <!-- Mapping rules:\n");
    for rule in rules {
        let mut line = format!(
            "{} -> {} [{}]",
            rule.source_path, rule.target_path, rule.transformation
        );
        if !rule.condition.trim().is_empty() {
            let _ = write!(line, " when: {}", rule.condition);
        }
        let _ = writeln!(out, "       {}", comment_text(&line));
    }
    out.push_str("  -->\n\n");
    out
}

/// A single-line template comment, emitted only when comments are enabled.
pub fn comment(config: &TransformationConfig, text: &str) -> String {
    if config.generate_comments {
        format!("  <!-- {} -->\n", comment_text(text))
    } else {
        String::new()
    }
}

/// Make text legal inside an XML comment: `--` must not appear in the body
/// (XML 1.0 §2.5), so runs of dashes are broken apart.
fn comment_text(text: &str) -> String {
    let mut safe = text.to_string();
    while safe.contains("--") {
        safe = safe.replace("--", "- -");
    }
    safe
}

pub fn stylesheet_close() -> &'static str {
    "</xsl:stylesheet>\n"
}
