//! The normalized record every parser produces and every renderer consumes.

use crate::timestamp;
use crate::value::PropertyValue;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One normalized log event.
///
/// Five standard fields plus an open property map. `exception` and
/// `event_id` distinguish absent from empty; `properties` preserves
/// insertion order because it decides output column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Timezone-aware when the source encoded one, otherwise the sentinel
    /// minimum from [`timestamp::unset`].
    pub timestamp: DateTime<FixedOffset>,
    /// Short free-text severity tag. Case is preserved as read; compare with
    /// [`Record::level_is`].
    pub level: String,
    /// Free-text body; may span multiple lines.
    pub message: String,
    pub exception: Option<String>,
    pub event_id: Option<String>,
    pub properties: IndexMap<String, PropertyValue>,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            timestamp: timestamp::unset(),
            level: "INFO".to_string(),
            message: String::new(),
            exception: None,
            event_id: None,
            properties: IndexMap::new(),
        }
    }
}

impl Record {
    /// Case-insensitive level comparison.
    pub fn level_is(&self, level: &str) -> bool {
        self.level.eq_ignore_ascii_case(level)
    }

    /// CSS color keyed by severity, used by the colored Markdown/HTML output.
    pub fn level_color(&self) -> &'static str {
        match self.level.to_ascii_uppercase().as_str() {
            "ERROR" => "red",
            "WARNING" => "orange",
            "DEBUG" => "gray",
            "INFO" => "green",
            _ => "black",
        }
    }
}

/// Canonical wire names, in canonical order.
const FIELD_TIMESTAMP: &str = "timestamp";
const FIELD_LEVEL: &str = "level";
const FIELD_MESSAGE: &str = "message";
const FIELD_EXCEPTION: &str = "exception";
const FIELD_EVENT_ID: &str = "eventId";
const FIELD_PROPERTIES: &str = "properties";

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 6)?;
        state.serialize_field(
            FIELD_TIMESTAMP,
            &timestamp::to_roundtrip_string(&self.timestamp),
        )?;
        state.serialize_field(FIELD_LEVEL, &self.level)?;
        state.serialize_field(FIELD_MESSAGE, &self.message)?;
        state.serialize_field(FIELD_EXCEPTION, &self.exception)?;
        state.serialize_field(FIELD_EVENT_ID, &self.event_id)?;
        state.serialize_field(FIELD_PROPERTIES, &self.properties)?;
        state.end()
    }
}

/// Field matching is case-insensitive and ignores `_`/`-`, so `eventId`,
/// `EventId` and `event_id` all land on the same field.
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a log record object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
                let mut record = Record::default();
                while let Some(key) = map.next_key::<String>()? {
                    match normalize_key(&key).as_str() {
                        "timestamp" => {
                            // A timestamp that fails to parse keeps the
                            // sentinel instead of failing the record.
                            if let Some(raw) = map.next_value::<Option<String>>()? {
                                if let Some(ts) = timestamp::parse(&raw) {
                                    record.timestamp = ts;
                                }
                            }
                        }
                        "level" => {
                            if let Some(level) = map.next_value::<Option<String>>()? {
                                record.level = level;
                            }
                        }
                        "message" => {
                            record.message = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        "exception" => {
                            record.exception = map.next_value()?;
                        }
                        "eventid" => {
                            record.event_id = map.next_value()?;
                        }
                        "properties" => {
                            record.properties = map
                                .next_value::<Option<IndexMap<String, PropertyValue>>>()?
                                .unwrap_or_default();
                        }
                        // Unknown top-level fields are ignored.
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = Record::default();
        assert!(timestamp::is_unset(&record.timestamp));
        assert_eq!(record.level, "INFO");
        assert_eq!(record.exception, None);
        assert_eq!(record.event_id, None);
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_level_is_ignores_case() {
        let record = Record {
            level: "error".to_string(),
            ..Record::default()
        };
        assert!(record.level_is("ERROR"));
        assert!(!record.level_is("WARN"));
    }

    #[test]
    fn test_level_color_mapping() {
        for (level, color) in [
            ("ERROR", "red"),
            ("warning", "orange"),
            ("Debug", "gray"),
            ("INFO", "green"),
            ("NOTICE", "black"),
        ] {
            let record = Record {
                level: level.to_string(),
                ..Record::default()
            };
            assert_eq!(record.level_color(), color);
        }
    }

    #[test]
    fn test_deserialize_is_case_insensitive() {
        let raw = r#"{
            "TIMESTAMP": "2025-04-24T10:00:00Z",
            "Level": "WARN",
            "MESSAGE": "disk almost full",
            "Event_Id": "E42",
            "Properties": {"disk": "sda1", "usage": 91}
        }"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.level, "WARN");
        assert_eq!(record.message, "disk almost full");
        assert_eq!(record.event_id.as_deref(), Some("E42"));
        assert_eq!(
            record.properties.get("usage"),
            Some(&PropertyValue::Int(91))
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let raw = r#"{"message": "hi", "host": "web-1"}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.message, "hi");
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_deserialize_bad_timestamp_keeps_sentinel() {
        let raw = r#"{"timestamp": "yesterday", "message": "hi"}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert!(timestamp::is_unset(&record.timestamp));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut record = Record {
            timestamp: timestamp::parse("2025-04-24T10:00:00+02:00").unwrap(),
            level: "ERROR".to_string(),
            message: "boom".to_string(),
            exception: Some("stack trace".to_string()),
            event_id: Some("E1".to_string()),
            properties: IndexMap::new(),
        };
        record.properties.insert("retries".to_string(), 3.into());
        record.properties.insert("fatal".to_string(), false.into());

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
