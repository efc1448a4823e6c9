//! Markup source to tree-object target (text-method output).

use crate::common::{
    BOOLEAN_TEST, FN_NS, NUMERIC_TEST, SIBLING_RUN_MATCH, comment, output_directive,
    rules_comment, stylesheet_close, stylesheet_open,
};
use crate::strategy::TemplateContext;

pub(crate) fn emit(context: &TemplateContext<'_>) -> String {
    let config = context.config;

    let mut out = stylesheet_open(config, &[("fn", FN_NS)]);
    out.push_str(&output_directive(config, "text"));
    out.push_str(&rules_comment(config, context.rules));

    out.push_str(&comment(config, "Root template for XML to JSON conversion"));
    out.push_str(
        "  <xsl:template match=\"/\">\n    \
         <xsl:text>{</xsl:text>\n    \
         <xsl:apply-templates select=\"*\"/>\n    \
         <xsl:text>}</xsl:text>\n  </xsl:template>\n\n",
    );

    out.push_str(&comment(config, "Template for elements with children"));
    out.push_str(
        "  <xsl:template match=\"*[*]\">\n    \
         <xsl:text>\"</xsl:text><xsl:value-of select=\"local-name()\"/><xsl:text>\": {</xsl:text>\n    \
         <xsl:for-each select=\"*\">\n      \
         <xsl:apply-templates select=\".\"/>\n      \
         <xsl:if test=\"position() != last()\">\n        \
         <xsl:text>,</xsl:text>\n      \
         </xsl:if>\n    \
         </xsl:for-each>\n    \
         <xsl:text>}</xsl:text>\n    \
         <xsl:if test=\"position() != last()\">\n      \
         <xsl:text>,</xsl:text>\n    \
         </xsl:if>\n  </xsl:template>\n\n",
    );

    out.push_str(&comment(
        config,
        "Handle arrays (multiple elements with same name)",
    ));
    out.push_str(&format!(
        "  <xsl:template match=\"{SIBLING_RUN_MATCH}\">\n    \
         <xsl:if test=\"position() = 1\">\n      \
         <xsl:text>\"</xsl:text><xsl:value-of select=\"local-name()\"/><xsl:text>\": [</xsl:text>\n    \
         </xsl:if>\n    \
         <xsl:text>{{</xsl:text>\n    \
         <xsl:apply-templates select=\"@*\"/>\n    \
         <xsl:apply-templates select=\"node()[not(self::text()[normalize-space()=''])]\"/>\n    \
         <xsl:text>}}</xsl:text>\n    \
         <xsl:if test=\"position() != last()\">\n      \
         <xsl:text>,</xsl:text>\n    \
         </xsl:if>\n    \
         <xsl:if test=\"position() = last()\">\n      \
         <xsl:text>]</xsl:text>\n      \
         <xsl:if test=\"following-sibling::*[local-name() != local-name(current())]\">\n        \
         <xsl:text>,</xsl:text>\n      \
         </xsl:if>\n    \
         </xsl:if>\n  </xsl:template>\n\n",
    ));

    out.push_str(&comment(config, "Template for leaf elements"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*)]\">\n    \
         <xsl:text>\"</xsl:text><xsl:value-of select=\"local-name()\"/><xsl:text>\": </xsl:text>\n    \
         <xsl:choose>\n      \
         <xsl:when test=\"{NUMERIC_TEST}\">\n        \
         <xsl:value-of select=\".\"/>\n      \
         </xsl:when>\n      \
         <xsl:when test=\"{BOOLEAN_TEST}\">\n        \
         <xsl:value-of select=\".\"/>\n      \
         </xsl:when>\n      \
         <xsl:when test=\"not(normalize-space(.))\">\n        \
         <xsl:text>null</xsl:text>\n      \
         </xsl:when>\n      \
         <xsl:otherwise>\n        \
         <xsl:text>\"</xsl:text><xsl:value-of select=\"normalize-space(.)\"/><xsl:text>\"</xsl:text>\n      \
         </xsl:otherwise>\n    \
         </xsl:choose>\n    \
         <xsl:if test=\"position() != last()\">\n      \
         <xsl:text>,</xsl:text>\n    \
         </xsl:if>\n  </xsl:template>\n\n",
    ));

    out.push_str(&comment(config, "Template for attributes"));
    out.push_str(
        "  <xsl:template match=\"@*\">\n    \
         <xsl:text>\"@</xsl:text><xsl:value-of select=\"local-name()\"/><xsl:text>\": \"</xsl:text>\n    \
         <xsl:value-of select=\".\"/>\n    \
         <xsl:text>\"</xsl:text>\n    \
         <xsl:if test=\"position() != last() or ../node()[not(self::text()[normalize-space()=''])]\">\n      \
         <xsl:text>,</xsl:text>\n    \
         </xsl:if>\n  </xsl:template>\n\n",
    );

    out.push_str(stylesheet_close());
    out
}

#[cfg(test)]
mod tests {
    use xst_model::{DataFormat, OutputFormat, TransformationConfig};

    use crate::strategy::generate;

    fn template() -> String {
        let config = TransformationConfig {
            output_format: OutputFormat::Json,
            ..TransformationConfig::default()
        };
        generate(DataFormat::Xml, &config, &[]).template
    }

    #[test]
    fn uses_text_output_method() {
        assert!(template().contains("<xsl:output method=\"text\""));
    }

    #[test]
    fn array_markers_bracket_the_sibling_run() {
        let template = template();
        assert!(template.contains("<xsl:if test=\"position() = 1\">"));
        assert!(template.contains("<xsl:if test=\"position() = last()\">"));
        assert!(template.contains(
            "*[count(../*[local-name() = local-name(current())]) > 1]"
        ));
    }

    #[test]
    fn leaf_template_infers_scalar_kinds() {
        let template = template();
        assert!(template.contains("number(.) = number(.) and string(number(.)) = string(.)"));
        assert!(template.contains(". = 'true' or . = 'false'"));
        assert!(template.contains("<xsl:text>null</xsl:text>"));
    }

    #[test]
    fn attributes_get_marker_prefix() {
        assert!(template().contains("<xsl:text>\"@</xsl:text>"));
    }

    #[test]
    fn declares_functions_namespace() {
        assert!(template().contains("xmlns:fn=\"http://www.w3.org/2005/xpath-functions\""));
    }
}
