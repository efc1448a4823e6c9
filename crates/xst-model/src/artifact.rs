//! Generated template artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{DataFormat, OutputFormat};

/// One generated stylesheet, created fresh per generation run.
///
/// Artifacts are never mutated in place; a new one replaces the old.
/// The timestamp records when generation ran and is excluded from any
/// determinism guarantee, which covers `template` text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    pub template: String,
    pub source_format: DataFormat,
    pub target_format: OutputFormat,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedArtifact {
    pub fn new(template: String, source_format: DataFormat, target_format: OutputFormat) -> Self {
        Self {
            template,
            source_format,
            target_format,
            generated_at: Utc::now(),
        }
    }
}
