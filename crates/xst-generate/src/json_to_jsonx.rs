//! Tree-object source to attributed-tree (JSONX) target.

use crate::common::{
    BOOLEAN_TEST, JSONX_NS, NUMERIC_TEST, SIBLING_RUN_MATCH, comment, output_directive,
    rules_comment, stylesheet_close, stylesheet_open,
};
use crate::strategy::TemplateContext;

pub(crate) fn emit(context: &TemplateContext<'_>) -> String {
    let config = context.config;

    let mut out = stylesheet_open(config, &[("jsonx", JSONX_NS)]);
    out.push_str(&output_directive(config, "xml"));
    out.push_str(&rules_comment(config, context.rules));

    out.push_str(&comment(config, "Root template for JSON to JSONX conversion"));
    out.push_str(&format!(
        "  <xsl:template match=\"/\">\n    \
         <jsonx:object xmlns:jsonx=\"{JSONX_NS}\">\n      \
         <xsl:apply-templates select=\"*\"/>\n    \
         </jsonx:object>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for JSON objects"));
    out.push_str(
        "  <xsl:template match=\"*[*]\">\n    \
         <jsonx:object name=\"{local-name()}\">\n      \
         <xsl:apply-templates select=\"*\"/>\n    \
         </jsonx:object>\n  </xsl:template>\n\n",
    );

    // The whole run is emitted at its first member; later members match the
    // same template and emit nothing. Position within the sibling group
    // decides emission, not node identity.
    out.push_str(&comment(config, "Template for JSON arrays"));
    out.push_str(&format!(
        "  <xsl:template match=\"{SIBLING_RUN_MATCH}\">\n    \
         <xsl:if test=\"position() = 1\">\n      \
         <jsonx:array name=\"{{local-name()}}\">\n        \
         <xsl:for-each select=\"../*[local-name() = local-name(current())]\">\n          \
         <jsonx:object>\n            \
         <xsl:apply-templates select=\"*\"/>\n          \
         </jsonx:object>\n        \
         </xsl:for-each>\n      \
         </jsonx:array>\n    \
         </xsl:if>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for simple string values"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*) and not({NUMERIC_TEST}) and not({BOOLEAN_TEST}) and normalize-space(.)]\">\n    \
         <jsonx:string name=\"{{local-name()}}\">\n      \
         <xsl:value-of select=\".\"/>\n    \
         </jsonx:string>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for numeric values"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*) and {NUMERIC_TEST}]\">\n    \
         <jsonx:number name=\"{{local-name()}}\">\n      \
         <xsl:value-of select=\".\"/>\n    \
         </jsonx:number>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for boolean values"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*) and ({BOOLEAN_TEST})]\">\n    \
         <jsonx:boolean name=\"{{local-name()}}\">\n      \
         <xsl:value-of select=\".\"/>\n    \
         </jsonx:boolean>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for null values"));
    out.push_str(
        "  <xsl:template match=\"*[not(*) and not(normalize-space(.))]\">\n    \
         <jsonx:null name=\"{local-name()}\"/>\n  </xsl:template>\n\n",
    );

    if config.include_metadata {
        out.push_str(&comment(config, "Metadata handling"));
        out.push_str(
            "  <xsl:template match=\"metadata\">\n    \
             <jsonx:object name=\"metadata\">\n      \
             <xsl:apply-templates select=\"*\"/>\n      \
             <jsonx:string name=\"generatedBy\">XSLT Transformation</jsonx:string>\n    \
             </jsonx:object>\n  </xsl:template>\n\n",
        );
    }

    out.push_str(stylesheet_close());
    out
}

#[cfg(test)]
mod tests {
    use xst_model::{DataFormat, OutputFormat, TransformationConfig};

    use crate::strategy::generate;

    fn template() -> String {
        let config = TransformationConfig {
            output_format: OutputFormat::Jsonx,
            ..TransformationConfig::default()
        };
        generate(DataFormat::Json, &config, &[]).template
    }

    #[test]
    fn declares_jsonx_namespace() {
        assert!(
            template().contains("xmlns:jsonx=\"http://www.ibm.com/xmlns/prod/2009/jsonx\"")
        );
    }

    #[test]
    fn emits_typed_leaf_templates() {
        let template = template();
        assert!(template.contains("<jsonx:string name=\"{local-name()}\">"));
        assert!(template.contains("<jsonx:number name=\"{local-name()}\">"));
        assert!(template.contains("<jsonx:boolean name=\"{local-name()}\">"));
        assert!(template.contains("<jsonx:null name=\"{local-name()}\"/>"));
    }

    #[test]
    fn root_is_implicit_jsonx_object() {
        let template = template();
        assert!(template.contains("<jsonx:object xmlns:jsonx="));
        // Markup root element name is not used for jsonx targets.
        assert!(!template.contains("<root>"));
    }

    #[test]
    fn metadata_block_gated_on_flag() {
        let config = TransformationConfig {
            output_format: OutputFormat::Jsonx,
            include_metadata: true,
            ..TransformationConfig::default()
        };
        let template = generate(DataFormat::Json, &config, &[]).template;
        assert!(template.contains("<jsonx:string name=\"generatedBy\">"));
    }
}
