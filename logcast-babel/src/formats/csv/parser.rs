//! CSV parsing (CSV → records)

use logcast_record::{timestamp, PropertyValue, Record};

/// Parse CSV text. Never fails: malformed cells degrade to fallback values
/// and fewer than two non-empty lines yields an empty batch.
pub fn parse_records(source: &str) -> Vec<Record> {
    let lines: Vec<&str> = source.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    let mut records = Vec::new();

    for line in &lines[1..] {
        let cols: Vec<&str> = line.split(',').map(str::trim).collect();

        let mut record = Record {
            timestamp: cols
                .first()
                .and_then(|c| timestamp::parse(c))
                .unwrap_or_else(timestamp::unset),
            level: cols.get(1).copied().unwrap_or("").to_string(),
            message: cols.get(2).copied().unwrap_or("").to_string(),
            exception: cols
                .get(3)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string()),
            event_id: cols
                .get(4)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string()),
            ..Record::default()
        };

        for idx in 5..headers.len().min(cols.len()) {
            record
                .properties
                .insert(headers[idx].to_string(), PropertyValue::coerce(cols[idx]));
        }

        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_typed_properties() {
        let source = "\
Timestamp,Level,Message,Exception,EventId,retries,fatal,host
2025-04-24T10:00:00Z,ERROR,boom,oops,E1,3,true,web-1
";
        let records = parse_records(source);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.exception.as_deref(), Some("oops"));
        assert_eq!(record.event_id.as_deref(), Some("E1"));
        assert_eq!(record.properties.get("retries"), Some(&PropertyValue::Int(3)));
        assert_eq!(
            record.properties.get("fatal"),
            Some(&PropertyValue::Bool(true))
        );
        assert_eq!(
            record.properties.get("host"),
            Some(&PropertyValue::Str("web-1".to_string()))
        );
    }

    #[test]
    fn test_bad_timestamp_becomes_sentinel() {
        let source = "Timestamp,Level,Message\nnot-a-date,INFO,hello\n";
        let records = parse_records(source);
        assert!(timestamp::is_unset(&records[0].timestamp));
        assert_eq!(records[0].message, "hello");
    }

    #[test]
    fn test_missing_trailing_columns_default() {
        let source = "Timestamp,Level,Message,Exception,EventId\n2025-04-24T10:00:00Z,WARN\n";
        let records = parse_records(source);
        assert_eq!(records[0].level, "WARN");
        assert_eq!(records[0].message, "");
        assert_eq!(records[0].exception, None);
        assert_eq!(records[0].event_id, None);
    }

    #[test]
    fn test_header_only_is_empty_batch() {
        assert!(parse_records("Timestamp,Level,Message\n").is_empty());
        assert!(parse_records("").is_empty());
        assert!(parse_records("\n\n").is_empty());
    }

    #[test]
    fn test_quoted_fields_are_not_unescaped() {
        // Naive comma split: the quoted message is torn apart. Pinned
        // behavior, see the module docs.
        let source = "Timestamp,Level,Message,Exception,EventId\n\
2025-04-24T10:00:00Z,ERROR,\"a,b\",,\n";
        let records = parse_records(source);
        assert_eq!(records[0].message, "\"a");
        assert_eq!(records[0].exception.as_deref(), Some("b\""));
    }
}
