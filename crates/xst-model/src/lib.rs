#![deny(unsafe_code)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod format;
pub mod rule;
pub mod samples;
pub mod validation;

pub use artifact::GeneratedArtifact;
pub use config::TransformationConfig;
pub use error::{ModelError, Result};
pub use format::{ATTRIBUTE_MARKER, DataFormat, OutputFormat};
pub use rule::{MappingRule, RuleId, TransformationKind};
pub use validation::ValidationResult;
