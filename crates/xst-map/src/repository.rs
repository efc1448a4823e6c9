//! File-system repository for saving and reusing rule sets.
//!
//! Rule sets are stored as JSON files named `<name>.json` under a base
//! directory so a mapping worked out for one document can be reloaded for
//! the next run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use xst_model::MappingRule;

/// A persisted rule set with repository metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRuleSet {
    pub rules: Vec<MappingRule>,
    /// ISO-8601 timestamp of when this set was saved.
    pub saved_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Directory-backed storage for named rule sets.
#[derive(Debug, Clone)]
pub struct RuleSetRepository {
    base_dir: PathBuf,
}

impl RuleSetRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Save a rule set under a name, creating the base directory if needed.
    pub fn save(&self, name: &str, rules: &[MappingRule]) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("create {}", self.base_dir.display()))?;
        let stored = StoredRuleSet {
            rules: rules.to_vec(),
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: None,
        };
        let path = self.path_for(name);
        let json = serde_json::to_string_pretty(&stored).context("serialize rule set")?;
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        info!(name, count = rules.len(), "saved rule set");
        Ok(path)
    }

    /// Load a named rule set.
    pub fn load(&self, name: &str) -> Result<Vec<MappingRule>> {
        let path = self.path_for(name);
        let json =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        let stored: StoredRuleSet =
            serde_json::from_str(&json).with_context(|| format!("parse {}", path.display()))?;
        Ok(stored.rules)
    }

    /// List saved rule-set names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.base_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.base_dir)
            .with_context(|| format!("read {}", self.base_dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.json"))
    }
}

/// Read a rule list from an arbitrary JSON file.
///
/// Accepts either a bare rule array or a full [`StoredRuleSet`] document.
pub fn load_rules_file(path: &Path) -> Result<Vec<MappingRule>> {
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if let Ok(rules) = serde_json::from_str::<Vec<MappingRule>>(&json) {
        return Ok(rules);
    }
    let stored: StoredRuleSet =
        serde_json::from_str(&json).with_context(|| format!("parse {}", path.display()))?;
    Ok(stored.rules)
}

#[cfg(test)]
mod tests {
    use xst_model::samples::sample_rules;
    use xst_model::DataFormat;

    use super::*;

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RuleSetRepository::new(dir.path());
        let rules = sample_rules(DataFormat::Json);
        repo.save("employees", &rules).unwrap();
        let loaded = repo.load("employees").unwrap();
        assert_eq!(loaded, rules);
    }

    #[test]
    fn list_returns_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RuleSetRepository::new(dir.path());
        repo.save("zeta", &[]).unwrap();
        repo.save("alpha", &[]).unwrap();
        assert_eq!(repo.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn list_on_missing_dir_is_empty() {
        let repo = RuleSetRepository::new("/nonexistent/rule-sets");
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn load_rules_file_accepts_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let rules = sample_rules(DataFormat::Xml);
        fs::write(&path, serde_json::to_string(&rules).unwrap()).unwrap();
        assert_eq!(load_rules_file(&path).unwrap(), rules);
    }
}
