//! Loosely-structured text format (parse only)
//!
//! Line-oriented heuristic parser for plain log files. A line of the shape
//! `YYYY-MM-DD HH:MM:SS - <rest>` starts a new record; any other non-blank
//! line is a continuation and is appended to the message of the most
//! recently started record with an embedded line break. Continuation lines
//! before the first record have nowhere to go and are dropped.
//!
//! The severity heuristic marks a record ERROR when the rest of the line
//! contains the substring "hata" (case-insensitive), the error marker of the
//! log dialect this parser was built for. Everything else is INFO.

use crate::error::FormatError;
use crate::format::Format;
use logcast_record::{timestamp, Record};
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) - (.*)$").unwrap());

pub fn parse_records(source: &str) -> Vec<Record> {
    let mut records: Vec<Record> = Vec::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(caps) = LINE_PATTERN.captures(line) {
            let rest = &caps[2];
            let level = if rest.to_lowercase().contains("hata") {
                "ERROR"
            } else {
                "INFO"
            };
            records.push(Record {
                timestamp: timestamp::parse(&caps[1]).unwrap_or_else(timestamp::unset),
                level: level.to_string(),
                message: rest.to_string(),
                ..Record::default()
            });
        } else if let Some(last) = records.last_mut() {
            last.message.push('\n');
            last.message.push_str(line);
        }
    }

    records
}

/// Format implementation for loosely-structured text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Loosely-structured plain text log lines"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "log"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Record>, FormatError> {
        Ok(parse_records(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_marker_with_continuation() {
        let source = "2025-04-24 10:00:00 - Sunucu hata verdi\nek satır";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, "ERROR");
        assert_eq!(records[0].message, "Sunucu hata verdi\nek satır");
    }

    #[test]
    fn test_plain_line_is_info() {
        let records = parse_records("2025-04-24 10:00:00 - Sunucu başlatıldı");
        assert_eq!(records[0].level, "INFO");
        assert_eq!(
            timestamp::to_display_string(&records[0].timestamp),
            "2025-04-24 10:00:00"
        );
    }

    #[test]
    fn test_marker_match_is_case_insensitive() {
        let records = parse_records("2025-04-24 10:00:00 - HATA: bağlantı koptu");
        assert_eq!(records[0].level, "ERROR");
    }

    #[test]
    fn test_leading_orphan_lines_dropped() {
        let source = "orphan line\n2025-04-24 10:00:00 - first";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "first");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let source = "2025-04-24 10:00:00 - one\n\n   \n2025-04-24 10:00:01 - two";
        let records = parse_records(source);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_not_serializable() {
        use crate::options::RenderOptions;
        let format = TextFormat;
        assert!(!format.supports_serialization());
        match format.serialize(&[], &RenderOptions::default()) {
            Err(FormatError::NotSupported(_)) => {}
            other => panic!("Expected NotSupported, got {other:?}"),
        }
    }
}
