//! Markdown format (serialize only)

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use logcast_record::Record;

/// Format implementation for Markdown
///
/// Emits a pipe-delimited table. Cell content is not pipe-escaped; a message
/// containing `|` or a line break will break the table layout. Accepted
/// fidelity gap.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Pipe-delimited Markdown table"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(
        &self,
        records: &[Record],
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Ok(serializer::serialize_records(records, options))
    }
}
