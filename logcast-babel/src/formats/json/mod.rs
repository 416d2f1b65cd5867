//! JSON format (parse + serialize)
//!
//! Parsing deserializes an array of objects onto the record shape with
//! case-insensitive field matching (the record model owns that logic);
//! unknown top-level fields are ignored and `properties` is a nested open
//! mapping. Empty or blank input is an empty batch, not an error; a
//! syntactically broken document fails the whole parse.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use logcast_record::Record;

/// Format implementation for JSON
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of log records"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Record>, FormatError> {
        if source.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(source).map_err(|e| FormatError::MalformedInput(e.to_string()))
    }

    fn serialize(
        &self,
        records: &[Record],
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        serializer::serialize_records(records, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcast_record::PropertyValue;

    #[test]
    fn test_parse_array_of_records() {
        let format = JsonFormat;
        let source = r#"[
            {"timestamp": "2025-04-24T10:00:00Z", "level": "ERROR", "message": "boom",
             "properties": {"retries": 2, "fatal": true, "host": "web-1"}}
        ]"#;

        let records = format.parse(source).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, "ERROR");
        assert_eq!(
            records[0].properties.get("retries"),
            Some(&PropertyValue::Int(2))
        );
        assert_eq!(
            records[0].properties.get("fatal"),
            Some(&PropertyValue::Bool(true))
        );
    }

    #[test]
    fn test_parse_empty_input_is_empty_batch() {
        let format = JsonFormat;
        assert!(format.parse("").unwrap().is_empty());
        assert!(format.parse("  \n ").unwrap().is_empty());
        assert!(format.parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_document_fails() {
        let format = JsonFormat;
        match format.parse("[{\"level\": ") {
            Err(FormatError::MalformedInput(_)) => {}
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_format_trait() {
        let format = JsonFormat;
        assert_eq!(format.name(), "json");
        assert!(format.supports_parsing());
        assert!(format.supports_serialization());
        assert_eq!(format.file_extensions(), &["json"]);
    }
}
