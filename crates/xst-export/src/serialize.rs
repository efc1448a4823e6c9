//! Export container serialization.
//!
//! Wraps generated text for one of the output containers and hands the
//! bytes to the host's save mechanism. The archive container is a known
//! stub: it carries raw content under an archive filename, real packaging
//! being outside this core.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::warn;

/// Output container for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Raw stylesheet file.
    Xslt,
    /// Markup template file.
    XmlTemplate,
    /// Plain text.
    PlainText,
    /// Packaged archive. Stub: content is not actually archived.
    ZipPackage,
}

#[derive(Debug, Error)]
#[error("unknown export kind: {0}")]
pub struct UnknownExportKind(String);

impl FromStr for ExportKind {
    type Err = UnknownExportKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "xslt" => Ok(Self::Xslt),
            "xml" => Ok(Self::XmlTemplate),
            "txt" => Ok(Self::PlainText),
            "zip" => Ok(Self::ZipPackage),
            _ => Err(UnknownExportKind(value.to_string())),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xslt => "xslt",
            Self::XmlTemplate => "xml",
            Self::PlainText => "txt",
            Self::ZipPackage => "zip",
        };
        f.write_str(name)
    }
}

/// A serialized export ready for the host's save-as interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    kind: ExportKind,
}

impl ExportPayload {
    /// True when the payload claims an archive container but holds raw
    /// content.
    pub fn is_archive_stub(&self) -> bool {
        self.kind == ExportKind::ZipPackage
    }
}

/// Wrap content for an export container.
pub fn serialize(content: &str, kind: ExportKind) -> ExportPayload {
    let (filename, mime_type) = match kind {
        ExportKind::Xslt => ("transformation.xsl", "application/xml"),
        ExportKind::XmlTemplate => ("template.xml", "application/xml"),
        ExportKind::PlainText => ("transformation.txt", "text/plain"),
        ExportKind::ZipPackage => ("transformation-package.zip", "application/zip"),
    };
    if kind == ExportKind::ZipPackage {
        warn!("zip export is a stub: writing raw content under an archive filename");
    }
    ExportPayload {
        filename: filename.to_string(),
        mime_type: mime_type.to_string(),
        bytes: content.as_bytes().to_vec(),
        kind,
    }
}

/// Write a payload's bytes under its fixed filename in a directory.
pub fn write_payload(payload: &ExportPayload, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(&payload.filename);
    fs::write(&path, &payload.bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
