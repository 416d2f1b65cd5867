//! Conversion façade
//!
//! The functions the callers actually use: render a batch by target tag,
//! parse raw text by source tag, or go straight from a file path (parser
//! selected by extension) to rendered output. Each call builds its own
//! default registry; nothing is shared between calls.

use crate::error::FormatError;
use crate::options::RenderOptions;
use crate::registry::FormatRegistry;
use logcast_record::Record;
use std::path::Path;

/// Render a record batch into the target format.
pub fn convert(
    records: &[Record],
    format: &str,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    FormatRegistry::with_defaults().serialize(records, format, options)
}

/// Render a record batch and encode the text as UTF-8 bytes.
pub fn convert_to_bytes(
    records: &[Record],
    format: &str,
    options: &RenderOptions,
) -> Result<Vec<u8>, FormatError> {
    Ok(convert(records, format, options)?.into_bytes())
}

/// Parse raw text with the parser registered under the given tag.
pub fn parse_str(format: &str, source: &str) -> Result<Vec<Record>, FormatError> {
    FormatRegistry::with_defaults().parse(source, format)
}

/// Read a file and parse it with the parser matching its extension.
pub fn parse_file(path: &Path) -> Result<Vec<Record>, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let format = registry.format_for_extension(&extension)?;
    let source = std::fs::read_to_string(path)
        .map_err(|e| FormatError::Io(format!("{}: {e}", path.display())))?;
    format.parse(&source)
}

/// Parse a file by extension and render the records into the target format.
pub fn convert_file(
    path: &Path,
    format: &str,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    let records = parse_file(path)?;
    convert(&records, format, options)
}
