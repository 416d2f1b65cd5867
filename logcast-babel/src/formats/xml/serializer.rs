//! XML serialization (records → XML)
//!
//! Absent or empty `exception`/`eventId` children are omitted entirely
//! rather than emitted empty. Property element names are emitted as-is;
//! a key that is not a valid XML name produces a document the parser side
//! would reject. Kept as-is for fidelity with the source data model.

use crate::common::escape::escape_markup;
use logcast_record::{timestamp, Record};

pub fn serialize_records(records: &[Record]) -> String {
    let mut output = String::from("<logs>\n");

    for record in records {
        output.push_str("  <log>\n");
        output.push_str(&format!(
            "    <timestamp>{}</timestamp>\n",
            timestamp::to_roundtrip_string(&record.timestamp)
        ));
        output.push_str(&format!(
            "    <level>{}</level>\n",
            escape_markup(&record.level)
        ));
        output.push_str(&format!(
            "    <message>{}</message>\n",
            escape_markup(&record.message)
        ));
        if let Some(exception) = record.exception.as_deref().filter(|e| !e.is_empty()) {
            output.push_str(&format!(
                "    <exception>{}</exception>\n",
                escape_markup(exception)
            ));
        }
        if let Some(event_id) = record.event_id.as_deref().filter(|e| !e.is_empty()) {
            output.push_str(&format!(
                "    <eventId>{}</eventId>\n",
                escape_markup(event_id)
            ));
        }
        for (key, value) in &record.properties {
            output.push_str(&format!(
                "    <{key}>{}</{key}>\n",
                escape_markup(&value.to_string())
            ));
        }
        output.push_str("  </log>\n");
    }

    output.push_str("</logs>\n");
    output
}
