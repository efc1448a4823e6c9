//! Source and target format enumerations.
//!
//! Three tree-shaped source formats are supported: plain JSON, JSONX
//! (a JSON variant where `@`-prefixed keys carry XML attribute semantics),
//! and XML. Targets additionally include CSV, which has no generation
//! strategy and falls back at generation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Reserved key prefix marking an attribute in the JSONX encoding.
pub const ATTRIBUTE_MARKER: char = '@';

/// A source document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Jsonx,
    Xml,
}

impl DataFormat {
    /// All supported source formats, in display order.
    pub const ALL: [DataFormat; 3] = [DataFormat::Json, DataFormat::Jsonx, DataFormat::Xml];

    /// Conventional display form used in validation messages.
    pub fn upper_name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Jsonx => "JSONX",
            Self::Xml => "XML",
        }
    }

    /// Map a file extension (without dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonx" => Some(Self::Jsonx),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// True for the JSON-family formats (plain and attributed).
    pub fn is_json_family(self) -> bool {
        matches!(self, Self::Json | Self::Jsonx)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Jsonx => "jsonx",
            Self::Xml => "xml",
        };
        f.write_str(name)
    }
}

impl FromStr for DataFormat {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonx" => Ok(Self::Jsonx),
            "xml" => Ok(Self::Xml),
            _ => Err(ModelError::UnknownFormat(value.to_string())),
        }
    }
}

/// A transformation target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markup output (XML).
    Xml,
    /// Tree-object output (JSON text).
    Json,
    /// Attributed-tree output (JSONX markup encoding).
    Jsonx,
    /// Tabular output. No generation strategy exists for this target.
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Xml,
        OutputFormat::Json,
        OutputFormat::Jsonx,
        OutputFormat::Csv,
    ];

    pub fn upper_name(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Jsonx => "JSONX",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xml => "xml",
            Self::Json => "json",
            Self::Jsonx => "jsonx",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            "jsonx" => Ok(Self::Jsonx),
            "csv" => Ok(Self::Csv),
            _ => Err(ModelError::UnknownOutputFormat(value.to_string())),
        }
    }
}
