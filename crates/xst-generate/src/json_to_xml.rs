//! Tree-object source to markup target.

use crate::common::{comment, output_directive, rules_comment, stylesheet_close, stylesheet_open};
use crate::strategy::TemplateContext;

pub(crate) fn emit(context: &TemplateContext<'_>) -> String {
    let config = context.config;
    let root = &config.root_element;

    let mut out = stylesheet_open(config, &[]);
    out.push_str(&output_directive(config, "xml"));
    out.push_str(&rules_comment(config, context.rules));

    out.push_str(&comment(config, "Root template for JSON to XML conversion"));
    out.push_str(&format!("  <xsl:template match=\"/\">\n    <{root}>\n"));
    if config.include_metadata {
        out.push_str(
            "      <xsl:if test=\"//metadata\">\n        \
             <xsl:apply-templates select=\"//metadata\"/>\n      </xsl:if>\n",
        );
    }
    out.push_str(&format!(
        "      <xsl:apply-templates select=\"*\"/>\n    </{root}>\n  </xsl:template>\n\n"
    ));

    out.push_str(&comment(config, "Template for objects"));
    out.push_str(
        "  <xsl:template match=\"*[*]\">\n    \
         <xsl:element name=\"{local-name()}\">\n      \
         <xsl:apply-templates select=\"*\"/>\n    \
         </xsl:element>\n  </xsl:template>\n\n",
    );

    out.push_str(&comment(config, "Template for arrays"));
    out.push_str(
        "  <xsl:template match=\"*[count(*) > 1 and *[1][local-name() = local-name(*[2])]]\">\n    \
         <xsl:for-each select=\"*\">\n      \
         <xsl:element name=\"{local-name()}\">\n        \
         <xsl:if test=\"@* | *\">\n          \
         <xsl:apply-templates select=\"@* | *\"/>\n        \
         </xsl:if>\n        \
         <xsl:if test=\"not(@* | *)\">\n          \
         <xsl:value-of select=\".\"/>\n        \
         </xsl:if>\n      \
         </xsl:element>\n    \
         </xsl:for-each>\n  </xsl:template>\n\n",
    );

    out.push_str(&comment(config, "Template for simple values"));
    out.push_str(
        "  <xsl:template match=\"*[not(*) and not(@*)]\">\n    \
         <xsl:element name=\"{local-name()}\">\n      \
         <xsl:value-of select=\".\"/>\n    \
         </xsl:element>\n  </xsl:template>\n\n",
    );

    out.push_str(&comment(config, "Template for elements with attributes"));
    out.push_str(
        "  <xsl:template match=\"*[@*]\">\n    \
         <xsl:element name=\"{local-name()}\">\n      \
         <xsl:for-each select=\"@*\">\n        \
         <xsl:attribute name=\"{local-name()}\">\n          \
         <xsl:value-of select=\".\"/>\n        \
         </xsl:attribute>\n      \
         </xsl:for-each>\n      \
         <xsl:apply-templates select=\"node()\"/>\n    \
         </xsl:element>\n  </xsl:template>\n\n",
    );

    if config.include_metadata {
        out.push_str(&comment(config, "Metadata handling"));
        out.push_str(
            "  <xsl:template match=\"metadata\">\n    <metadata>\n      \
             <xsl:apply-templates select=\"*\"/>\n      \
             <generatedBy>XSLT Transformation</generatedBy>\n      \
             <timestamp><xsl:value-of select=\"current-dateTime()\"/></timestamp>\n    \
             </metadata>\n  </xsl:template>\n\n",
        );
    }

    out.push_str(stylesheet_close());
    out
}

#[cfg(test)]
mod tests {
    use xst_model::{DataFormat, OutputFormat, TransformationConfig};

    use crate::strategy::generate;

    #[test]
    fn root_element_name_appears_exactly_once_as_root() {
        let config = TransformationConfig {
            root_element: "catalog".to_string(),
            ..TransformationConfig::default()
        };
        let artifact = generate(DataFormat::Json, &config, &[]);
        assert_eq!(artifact.template.matches("<catalog>").count(), 1);
        assert_eq!(artifact.template.matches("</catalog>").count(), 1);
        assert_eq!(artifact.target_format, OutputFormat::Xml);
    }

    #[test]
    fn metadata_block_gated_on_flag() {
        let mut config = TransformationConfig::default();
        let without = generate(DataFormat::Json, &config, &[]).template;
        assert!(!without.contains("generatedBy"));
        config.include_metadata = true;
        let with = generate(DataFormat::Json, &config, &[]).template;
        assert!(with.contains("<generatedBy>XSLT Transformation</generatedBy>"));
        assert!(with.contains("<xsl:if test=\"//metadata\">"));
    }

    #[test]
    fn no_declaration_when_disabled() {
        let config = TransformationConfig {
            include_declaration: false,
            ..TransformationConfig::default()
        };
        let template = generate(DataFormat::Json, &config, &[]).template;
        assert!(!template.contains("<?xml"));
        assert!(template.starts_with("<xsl:stylesheet"));
    }

    #[test]
    fn template_is_well_formed_xml() {
        let config = TransformationConfig::default();
        let template = generate(DataFormat::Json, &config, &[]).template;
        let mut reader = quick_xml::Reader::from_str(&template);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {}
                Err(error) => panic!("generated template is not well-formed: {error}"),
            }
        }
    }
}
