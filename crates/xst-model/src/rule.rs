//! Field-mapping rule types.
//!
//! A mapping rule associates a path in the source document with a path in
//! the target document. Path syntax depends on the format: dotted/bracketed
//! for the JSON family (`users[*].name`), slash-delimited for markup
//! (`employees/employee/name`). The condition string is opaque; it is
//! stored and displayed but never parsed by this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Opaque rule identifier, unique within one rule list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RuleId(u64);

impl RuleId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a mapped value is derived from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformationKind {
    #[default]
    Direct,
    Aggregate,
    Filter,
    Sort,
    Group,
}

impl TransformationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Aggregate => "aggregate",
            Self::Filter => "filter",
            Self::Sort => "sort",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformationKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "aggregate" => Ok(Self::Aggregate),
            "filter" => Ok(Self::Filter),
            "sort" => Ok(Self::Sort),
            "group" => Ok(Self::Group),
            _ => Err(ModelError::UnknownTransformation(value.to_string())),
        }
    }
}

/// A user-declared association between a source path and a target path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    pub id: RuleId,
    pub source_path: String,
    pub target_path: String,
    pub transformation: TransformationKind,
    /// Free-form condition expression. Opaque: stored, never evaluated here.
    #[serde(default)]
    pub condition: String,
}

impl MappingRule {
    /// A blank rule as created by the store's `add`.
    pub fn blank(id: RuleId) -> Self {
        Self {
            id,
            source_path: String::new(),
            target_path: String::new(),
            transformation: TransformationKind::Direct,
            condition: String::new(),
        }
    }
}
