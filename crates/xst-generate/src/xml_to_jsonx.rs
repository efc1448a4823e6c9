//! Markup source to attributed-tree (JSONX) target.
//!
//! Differs from the JSON-source strategy in attribute handling: source
//! attributes are promoted to `@`-prefixed jsonx:string properties of
//! their owning object.

use crate::common::{
    BOOLEAN_TEST, JSONX_NS, NUMERIC_TEST, SIBLING_RUN_MATCH, comment, output_directive,
    rules_comment, stylesheet_close, stylesheet_open,
};
use crate::strategy::TemplateContext;

const ATTRIBUTE_COPY: &str = "<xsl:for-each select=\"@*\">\n        \
     <jsonx:string name=\"@{local-name()}\">\n          \
     <xsl:value-of select=\".\"/>\n        \
     </jsonx:string>\n      </xsl:for-each>";

pub(crate) fn emit(context: &TemplateContext<'_>) -> String {
    let config = context.config;

    let mut out = stylesheet_open(config, &[("jsonx", JSONX_NS)]);
    out.push_str(&output_directive(config, "xml"));
    out.push_str(&rules_comment(config, context.rules));

    out.push_str(&comment(config, "Root template for XML to JSONX conversion"));
    out.push_str(&format!(
        "  <xsl:template match=\"/\">\n    \
         <jsonx:object xmlns:jsonx=\"{JSONX_NS}\">\n      \
         <xsl:apply-templates select=\"*\"/>\n    \
         </jsonx:object>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for elements with children"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[*]\">\n    \
         <jsonx:object name=\"{{local-name()}}\">\n      \
         {ATTRIBUTE_COPY}\n      \
         <xsl:apply-templates select=\"*\"/>\n    \
         </jsonx:object>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(
        config,
        "Template for elements that appear multiple times (arrays)",
    ));
    out.push_str(&format!(
        "  <xsl:template match=\"{SIBLING_RUN_MATCH}\">\n    \
         <xsl:if test=\"position() = 1\">\n      \
         <jsonx:array name=\"{{local-name()}}\">\n        \
         <xsl:for-each select=\"../*[local-name() = local-name(current())]\">\n          \
         <jsonx:object>\n            \
         <xsl:for-each select=\"@*\">\n              \
         <jsonx:string name=\"@{{local-name()}}\">\n                \
         <xsl:value-of select=\".\"/>\n              \
         </jsonx:string>\n            \
         </xsl:for-each>\n            \
         <xsl:apply-templates select=\"node()[not(self::text()[normalize-space()=''])]\"/>\n          \
         </jsonx:object>\n        \
         </xsl:for-each>\n      \
         </jsonx:array>\n    \
         </xsl:if>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for leaf elements with text content"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*) and normalize-space()]\">\n    \
         <xsl:choose>\n      \
         <xsl:when test=\"{NUMERIC_TEST}\">\n        \
         <jsonx:number name=\"{{local-name()}}\">\n          \
         <xsl:value-of select=\".\"/>\n        \
         </jsonx:number>\n      \
         </xsl:when>\n      \
         <xsl:when test=\"{BOOLEAN_TEST}\">\n        \
         <jsonx:boolean name=\"{{local-name()}}\">\n          \
         <xsl:value-of select=\".\"/>\n        \
         </jsonx:boolean>\n      \
         </xsl:when>\n      \
         <xsl:otherwise>\n        \
         <jsonx:string name=\"{{local-name()}}\">\n          \
         <xsl:value-of select=\".\"/>\n        \
         </jsonx:string>\n      \
         </xsl:otherwise>\n    \
         </xsl:choose>\n    \
         {ATTRIBUTE_COPY}\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for empty elements"));
    out.push_str(&format!(
        "  <xsl:template match=\"*[not(*) and not(normalize-space())]\">\n    \
         <jsonx:null name=\"{{local-name()}}\"/>\n    \
         {ATTRIBUTE_COPY}\n  </xsl:template>\n\n"
    ));

    out.push_str(stylesheet_close());
    out
}
