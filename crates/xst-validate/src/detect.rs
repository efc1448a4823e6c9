//! Heuristic format sniffing for uploaded files.
//!
//! Classification is extension-first, then content-based: a leading `{` or
//! `[` marks the JSON family (refined to JSONX by a raw `"@` substring
//! probe), a leading `<` marks markup. The probe is deliberately cheap;
//! the full structural attribute scan belongs to validation.

use std::path::Path;

use tracing::debug;

use xst_model::DataFormat;

/// Classify raw text by its leading characters.
pub fn detect_format(raw: &str) -> Option<DataFormat> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if raw.contains("\"@") {
            Some(DataFormat::Jsonx)
        } else {
            Some(DataFormat::Json)
        }
    } else if trimmed.starts_with('<') {
        Some(DataFormat::Xml)
    } else {
        None
    }
}

/// Classify an uploaded file: recognized extension first, content second.
pub fn detect_from_path(path: &Path, contents: &str) -> Option<DataFormat> {
    if let Some(format) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DataFormat::from_extension)
    {
        debug!(%format, path = %path.display(), "format pinned by extension");
        return Some(format);
    }
    detect_format(contents)
}
