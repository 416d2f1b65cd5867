//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing raw
//! text into record batches and serializing record batches back to text.

use crate::error::FormatError;
use crate::options::RenderOptions;
use logcast_record::Record;

impl std::fmt::Debug for dyn Format + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Format").field("name", &self.name()).finish()
    }
}

/// Trait for log formats
///
/// Implementors provide conversion between a textual encoding and the
/// normalized record batch. Formats can support parsing, serialization,
/// or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, lowercase, without dot.
    /// Used for input dispatch by file path.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → records)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (records → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a record batch
    ///
    /// Default implementation returns NotSupported.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Vec<Record>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a record batch into source text
    ///
    /// Default implementation returns NotSupported.
    /// Formats that support serialization should override this method.
    fn serialize(
        &self,
        _records: &[Record],
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
