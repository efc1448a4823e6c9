//! Ordered mapping-rule collection with CRUD operations.
//!
//! The store is the single owner of its rule list. Order is significant
//! (it defines emission order) and is preserved by every edit that does
//! not explicitly reorder. Unknown ids are no-ops rather than errors:
//! callers obtain ids from `rules()`, so a miss only means the rule was
//! already removed.

use tracing::debug;

use xst_model::{MappingRule, RuleId, TransformationKind};

/// Which field of a rule an `update` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    SourcePath,
    TargetPath,
    Transformation,
    Condition,
}

/// Ordered collection of mapping rules.
#[derive(Debug, Clone, Default)]
pub struct MappingRuleStore {
    rules: Vec<MappingRule>,
    next_id: u64,
}

impl MappingRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank rule and return its fresh id.
    pub fn add(&mut self) -> RuleId {
        let id = self.fresh_id();
        self.rules.push(MappingRule::blank(id));
        id
    }

    /// Append an existing rule, re-issuing its id if it would collide.
    pub fn add_rule(&mut self, mut rule: MappingRule) -> RuleId {
        if self.rules.iter().any(|existing| existing.id == rule.id) {
            rule.id = self.fresh_id();
        } else {
            self.next_id = self.next_id.max(rule.id.value() + 1);
        }
        let id = rule.id;
        self.rules.push(rule);
        id
    }

    /// Remove a rule by id, preserving the relative order of the rest.
    pub fn remove(&mut self, id: RuleId) {
        self.rules.retain(|rule| rule.id != id);
    }

    /// Update one field of one rule. Unknown id is a no-op, as is an
    /// unparseable transformation value.
    pub fn update(&mut self, id: RuleId, field: RuleField, value: &str) {
        let Some(rule) = self.rules.iter_mut().find(|rule| rule.id == id) else {
            debug!(%id, "update for unknown rule id ignored");
            return;
        };
        match field {
            RuleField::SourcePath => rule.source_path = value.to_string(),
            RuleField::TargetPath => rule.target_path = value.to_string(),
            RuleField::Transformation => {
                if let Ok(kind) = value.parse::<TransformationKind>() {
                    rule.transformation = kind;
                }
            }
            RuleField::Condition => rule.condition = value.to_string(),
        }
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    fn fresh_id(&mut self) -> RuleId {
        let id = RuleId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
