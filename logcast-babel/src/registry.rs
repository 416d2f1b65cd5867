//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name, or selected for input
//! by file extension.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use logcast_record::Record;
use std::collections::HashMap;

/// Registry of log formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let records = registry.parse(raw, "json")?;
/// let markdown = registry.serialize(&records, "markdown", &RenderOptions::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Select an input format by file extension (lowercase, without dot)
    pub fn format_for_extension(&self, extension: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .values()
            .map(|f| f.as_ref())
            .find(|f| f.supports_parsing() && f.file_extensions().contains(&extension))
            .ok_or_else(|| FormatError::UnsupportedInput(format!(".{extension}")))
    }

    /// Parse source text using the specified format tag
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Record>, FormatError> {
        let fmt = self
            .formats
            .get(format)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::UnsupportedInput(format.to_string()))?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a record batch using the specified format tag
    pub fn serialize(
        &self,
        records: &[Record],
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(records, options)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::csv::CsvFormat);
        registry.register(crate::formats::xml::XmlFormat);
        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::html::HtmlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<Vec<Record>, FormatError> {
            Ok(vec![Record::default()])
        }
        fn serialize(
            &self,
            _records: &[Record],
            _options: &RenderOptions,
        ) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_parse() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let records = registry.parse("input", "test").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_registry_parse_unknown_tag() {
        let registry = FormatRegistry::new();
        match registry.parse("input", "nonexistent") {
            Err(FormatError::UnsupportedInput(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected UnsupportedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.serialize(&[], "test", &RenderOptions::default());
        assert_eq!(result.unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_unknown_tag() {
        let registry = FormatRegistry::new();
        match registry.serialize(&[], "nonexistent", &RenderOptions::default()) {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_extension_lookup() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert_eq!(registry.format_for_extension("tst").unwrap().name(), "test");
        match registry.format_for_extension("yaml") {
            Err(FormatError::UnsupportedInput(what)) => assert_eq!(what, ".yaml"),
            other => panic!("Expected UnsupportedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::with_defaults();
        for name in ["json", "csv", "xml", "text", "markdown", "html"] {
            assert!(registry.has(name), "missing format {name}");
        }
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat); // Replace

        assert_eq!(registry.list_formats().len(), 1);
    }
}
