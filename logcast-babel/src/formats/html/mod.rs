//! HTML format (serialize only)

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use logcast_record::Record;

/// Format implementation for HTML
///
/// Emits a full standalone document: optional embedded stylesheet, optional
/// summary banner, a table with per-row severity classes, adjacent-run group
/// headers and disclosure folding for long cells. All user content is
/// escaped before embedding.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone HTML report"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
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
