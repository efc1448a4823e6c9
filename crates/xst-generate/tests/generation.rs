//! Integration tests for template generation.

use proptest::prelude::*;
use quick_xml::Reader;
use quick_xml::events::Event;

use xst_generate::{fallback_template, generate};
use xst_model::samples::sample_rules;
use xst_model::{
    DataFormat, MappingRule, OutputFormat, RuleId, TransformationConfig, TransformationKind,
};

fn assert_well_formed(template: &str) {
    let mut reader = Reader::from_str(template);
    // Default reader config skips comment-body checks; comments carry
    // user text here, so hold them to the same standard.
    reader.config_mut().check_comments = true;
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => panic!("template not well-formed: {error}\n{template}"),
        }
    }
}

#[test]
fn all_strategies_emit_well_formed_stylesheets() {
    let pairs = [
        (DataFormat::Json, OutputFormat::Xml),
        (DataFormat::Xml, OutputFormat::Json),
        (DataFormat::Json, OutputFormat::Jsonx),
        (DataFormat::Xml, OutputFormat::Jsonx),
        (DataFormat::Jsonx, OutputFormat::Xml),
    ];
    for (source, target) in pairs {
        let config = TransformationConfig {
            output_format: target,
            include_metadata: true,
            ..TransformationConfig::default()
        };
        let artifact = generate(source, &config, &sample_rules(source));
        assert_well_formed(&artifact.template);
        assert!(artifact.template.contains("<xsl:stylesheet version=\"2.0\""));
        assert!(artifact.template.ends_with("</xsl:stylesheet>\n"));
    }
}

#[test]
fn generation_is_byte_identical_across_runs() {
    for target in OutputFormat::ALL {
        for source in DataFormat::ALL {
            let config = TransformationConfig {
                output_format: target,
                ..TransformationConfig::default()
            };
            let rules = sample_rules(source);
            let first = generate(source, &config, &rules);
            let second = generate(source, &config, &rules);
            assert_eq!(first.template.as_bytes(), second.template.as_bytes());
        }
    }
}

#[test]
fn catalog_root_appears_exactly_once() {
    let config = TransformationConfig {
        root_element: "catalog".to_string(),
        ..TransformationConfig::default()
    };
    let artifact = generate(DataFormat::Json, &config, &[]);
    assert_eq!(artifact.template.matches("<catalog>").count(), 1);
}

#[test]
fn rule_comments_only_when_enabled() {
    let rules = sample_rules(DataFormat::Json);
    let mut config = TransformationConfig::default();
    let with = generate(DataFormat::Json, &config, &rules).template;
    assert!(with.contains("Mapping rules:"));
    config.generate_comments = false;
    let without = generate(DataFormat::Json, &config, &rules).template;
    assert!(!without.contains("Mapping rules:"));
    assert!(!without.contains("<!--"));
}

#[test]
fn rule_list_size_does_not_change_structure() {
    // Rule content feeds comments only; with comments off, the structural
    // templates are identical regardless of the rule list.
    let config = TransformationConfig {
        generate_comments: false,
        ..TransformationConfig::default()
    };
    let none = generate(DataFormat::Json, &config, &[]).template;
    let some = generate(DataFormat::Json, &config, &sample_rules(DataFormat::Json)).template;
    assert_eq!(none, some);
}

#[test]
fn dashed_rule_text_keeps_template_well_formed() {
    let rule = MappingRule {
        id: RuleId::new(1),
        source_path: "users[*].balance".to_string(),
        target_path: "account/balance".to_string(),
        transformation: TransformationKind::Filter,
        condition: "balance -- fees > 0".to_string(),
    };
    for target in [OutputFormat::Xml, OutputFormat::Json, OutputFormat::Jsonx] {
        let config = TransformationConfig {
            output_format: target,
            ..TransformationConfig::default()
        };
        let template = generate(DataFormat::Json, &config, std::slice::from_ref(&rule)).template;
        assert_well_formed(&template);
        assert!(template.contains("balance - - fees > 0"));
    }
}

#[test]
fn fallback_template_is_well_formed() {
    let config = TransformationConfig::default();
    let template = fallback_template(&config);
    assert_well_formed(&template);
    assert!(template.contains("<root/>"));
}

proptest! {
    #[test]
    fn arbitrary_root_names_wrap_the_output_once(name in "[A-Za-z][A-Za-z0-9]{0,12}") {
        let config = TransformationConfig {
            root_element: name.clone(),
            ..TransformationConfig::default()
        };
        let template = generate(DataFormat::Json, &config, &[]).template;
        prop_assert_eq!(template.matches(&format!("<{name}>")).count(), 1);
        prop_assert_eq!(template.matches(&format!("</{name}>")).count(), 1);
    }
}

#[test]
fn custom_namespace_and_version_carried_in_header() {
    let config = TransformationConfig {
        xslt_version: "3.0".to_string(),
        encoding: "ISO-8859-1".to_string(),
        custom_namespace: Some("urn:example:custom".to_string()),
        ..TransformationConfig::default()
    };
    let template = generate(DataFormat::Json, &config, &[]).template;
    assert!(template.contains("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
    assert!(template.contains("<xsl:stylesheet version=\"3.0\""));
    assert!(template.contains("xmlns:custom=\"urn:example:custom\""));
}
