//! Built-in sample documents and rules.
//!
//! Used by the CLI's `--sample` path and as the fallback when no handoff
//! payload is present.

use crate::format::DataFormat;
use crate::rule::{MappingRule, RuleId, TransformationKind};

const SAMPLE_JSON: &str = r#"{
  "users": [
    {
      "id": 1,
      "name": "John Doe",
      "email": "john.doe@example.com",
      "department": "Engineering",
      "salary": 75000,
      "joinDate": "2023-01-15"
    },
    {
      "id": 2,
      "name": "Jane Smith",
      "email": "jane.smith@example.com",
      "department": "Marketing",
      "salary": 65000,
      "joinDate": "2023-03-20"
    }
  ],
  "metadata": {
    "totalRecords": 2,
    "lastUpdated": "2025-08-06T19:27:47Z"
  }
}"#;

const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<employees>
  <employee id="1">
    <name>John Doe</name>
    <email>john.doe@example.com</email>
    <department>Engineering</department>
    <salary>75000</salary>
    <joinDate>2023-01-15</joinDate>
  </employee>
  <employee id="2">
    <name>Jane Smith</name>
    <email>jane.smith@example.com</email>
    <department>Marketing</department>
    <salary>65000</salary>
    <joinDate>2023-03-20</joinDate>
  </employee>
  <metadata>
    <totalRecords>2</totalRecords>
    <lastUpdated>2025-08-06T19:27:47Z</lastUpdated>
  </metadata>
</employees>"#;

const SAMPLE_JSONX: &str = r#"{
  "users": [
    {
      "@id": "1",
      "name": "John Doe",
      "email": "john.doe@example.com",
      "department": "Engineering",
      "salary": 75000,
      "joinDate": "2023-01-15"
    },
    {
      "@id": "2",
      "name": "Jane Smith",
      "email": "jane.smith@example.com",
      "department": "Marketing",
      "salary": 65000,
      "joinDate": "2023-03-20"
    }
  ],
  "metadata": {
    "@type": "summary",
    "totalRecords": 2,
    "lastUpdated": "2025-08-06T19:27:47Z"
  }
}"#;

/// Built-in sample document for a source format.
pub fn sample_document(format: DataFormat) -> &'static str {
    match format {
        DataFormat::Json => SAMPLE_JSON,
        DataFormat::Xml => SAMPLE_XML,
        DataFormat::Jsonx => SAMPLE_JSONX,
    }
}

/// Sample mapping rules matching the sample document of a format.
pub fn sample_rules(format: DataFormat) -> Vec<MappingRule> {
    let path = |json: &str, xml: &str| -> String {
        if format == DataFormat::Xml {
            xml.to_string()
        } else {
            json.to_string()
        }
    };
    vec![
        MappingRule {
            id: RuleId::new(1),
            source_path: path("users[*].name", "employees/employee/name"),
            target_path: "employee/fullName".to_string(),
            transformation: TransformationKind::Direct,
            condition: String::new(),
        },
        MappingRule {
            id: RuleId::new(2),
            source_path: path("users[*].email", "employees/employee/email"),
            target_path: "employee/emailAddress".to_string(),
            transformation: TransformationKind::Direct,
            condition: String::new(),
        },
        MappingRule {
            id: RuleId::new(3),
            source_path: path("users[*].salary", "employees/employee/salary"),
            target_path: "employee/compensation".to_string(),
            transformation: TransformationKind::Filter,
            condition: "salary > 60000".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_samples_parse() {
        for format in [DataFormat::Json, DataFormat::Jsonx] {
            let value: serde_json::Value =
                serde_json::from_str(sample_document(format)).expect("sample parses");
            assert!(value.get("users").is_some());
            assert!(value.get("metadata").is_some());
        }
    }

    #[test]
    fn jsonx_sample_carries_attribute_keys() {
        assert!(sample_document(DataFormat::Jsonx).contains("\"@id\""));
    }

    #[test]
    fn sample_rules_have_unique_ids() {
        let rules = sample_rules(DataFormat::Json);
        assert_eq!(rules.len(), 3);
        assert_ne!(rules[0].id, rules[1].id);
        assert_ne!(rules[1].id, rules[2].id);
        assert_eq!(rules[2].condition, "salary > 60000");
    }

    #[test]
    fn xml_rules_use_slash_paths() {
        let rules = sample_rules(DataFormat::Xml);
        assert_eq!(rules[0].source_path, "employees/employee/name");
    }
}
