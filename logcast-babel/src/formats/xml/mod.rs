//! XML format (parse + serialize)
//!
//! Input is a root element containing repeated `log` children; each child
//! element of a `log` maps onto a standard field by name (`timestamp`,
//! `level`, `message`, `exception`, `eventId`) and anything else folds into
//! properties with the usual coercion. Output mirrors that shape under a
//! `<logs>` root. No attributes or namespaces on either side.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use logcast_record::Record;

/// Format implementation for XML
pub struct XmlFormat;

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML document with repeated <log> elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Record>, FormatError> {
        parser::parse_records(source)
    }

    fn serialize(
        &self,
        records: &[Record],
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Ok(serializer::serialize_records(records))
    }
}
