//! CSV serialization (records → CSV)

use crate::common::columns;
use crate::common::escape::escape_csv;
use logcast_record::{timestamp, Record};

pub fn serialize_records(records: &[Record]) -> String {
    let extra = columns::property_columns(records);
    let mut output = String::new();

    output.push_str(&columns::header_columns(records).join(","));
    output.push('\n');

    for record in records {
        let mut row = vec![
            timestamp::to_roundtrip_string(&record.timestamp),
            escape_csv(&record.level),
            escape_csv(&record.message),
            escape_csv(record.exception.as_deref().unwrap_or("")),
            escape_csv(record.event_id.as_deref().unwrap_or("")),
        ];
        for key in &extra {
            let value = record
                .properties
                .get(key)
                .map(|v| v.to_string())
                .unwrap_or_default();
            row.push(escape_csv(&value));
        }
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}
