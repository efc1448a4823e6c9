//! Process-local handoff between the setup and generation stages.
//!
//! The setup stage stores its validated input and configuration under a
//! fixed key; the generation stage takes it back out. Values are stored
//! serialized, so the store round-trips exactly what would cross a real
//! stage boundary. An absent key is a valid state: the consumer falls
//! back to the built-in sample data.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use xst_model::{DataFormat, MappingRule, TransformationConfig};

/// Fixed key the two stages agree on.
pub const HANDOFF_KEY: &str = "transformationData";

/// Payload crossing the setup/generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub input_data: String,
    pub input_format: DataFormat,
    pub transformation_config: TransformationConfig,
    #[serde(default)]
    pub mapping_rules: Vec<MappingRule>,
    /// ISO-8601 timestamp of when the payload was produced.
    pub timestamp: String,
}

impl HandoffPayload {
    pub fn new(
        input_data: String,
        input_format: DataFormat,
        transformation_config: TransformationConfig,
        mapping_rules: Vec<MappingRule>,
    ) -> Self {
        Self {
            input_data,
            input_format,
            transformation_config,
            mapping_rules,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// In-process key-value store for stage handoff.
#[derive(Debug, Clone, Default)]
pub struct HandoffStore {
    values: BTreeMap<String, String>,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize and store a payload under the fixed key.
    pub fn put(&mut self, payload: &HandoffPayload) -> Result<()> {
        let json = serde_json::to_string(payload).context("serialize handoff payload")?;
        self.values.insert(HANDOFF_KEY.to_string(), json);
        Ok(())
    }

    /// Remove and deserialize the payload; `None` when nothing was stored.
    pub fn take(&mut self) -> Result<Option<HandoffPayload>> {
        let Some(json) = self.values.remove(HANDOFF_KEY) else {
            debug!("no handoff payload present, caller falls back to sample data");
            return Ok(None);
        };
        let payload = serde_json::from_str(&json).context("parse handoff payload")?;
        Ok(Some(payload))
    }

    /// Deserialize without removing.
    pub fn peek(&self) -> Result<Option<HandoffPayload>> {
        self.values
            .get(HANDOFF_KEY)
            .map(|json| serde_json::from_str(json).context("parse handoff payload"))
            .transpose()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
