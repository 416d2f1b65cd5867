//! XML parsing (XML → records)
//!
//! Streams quick-xml events with a depth counter: depth 2 is a `log`
//! element, depth 3 one of its fields. Text below depth 3 accumulates into
//! the enclosing field, which matches element-value semantics for the odd
//! nested payload. Elements at depth 2 with other names are ignored.

use crate::error::FormatError;
use logcast_record::{timestamp, PropertyValue, Record};
use quick_xml::events::Event;
use quick_xml::Reader;

pub fn parse_records(source: &str) -> Result<Vec<Record>, FormatError> {
    let mut reader = Reader::from_str(source);
    let mut records = Vec::new();

    let mut depth = 0usize;
    let mut current: Option<Record> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FormatError::MalformedInput(e.to_string()))?;
        match event {
            Event::Start(start) => {
                depth += 1;
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if depth == 2 && name == "log" {
                    current = Some(Record::default());
                } else if depth == 3 && current.is_some() {
                    field = Some(name);
                    text.clear();
                }
            }
            Event::Empty(empty) => {
                let name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                if depth == 2 {
                    if let Some(record) = current.as_mut() {
                        apply_field(record, &name, "");
                    }
                }
            }
            Event::Text(chunk) => {
                if field.is_some() {
                    let unescaped = chunk
                        .unescape()
                        .map_err(|e| FormatError::MalformedInput(e.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(_) => {
                if depth == 3 {
                    if let (Some(record), Some(name)) = (current.as_mut(), field.take()) {
                        apply_field(record, &name, &text);
                    }
                } else if depth == 2 {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(records)
}

fn apply_field(record: &mut Record, name: &str, raw: &str) {
    match name {
        // Timestamp parsing is strict-then-lenient; failure leaves the
        // sentinel default without aborting the record.
        "timestamp" => {
            if let Some(ts) = timestamp::parse(raw) {
                record.timestamp = ts;
            }
        }
        "level" => record.level = raw.to_string(),
        "message" => record.message = raw.to_string(),
        "exception" => {
            record.exception = (!raw.is_empty()).then(|| raw.to_string());
        }
        "eventId" => {
            record.event_id = (!raw.is_empty()).then(|| raw.to_string());
        }
        _ => {
            record
                .properties
                .insert(name.to_string(), PropertyValue::coerce(raw));
        }
    }
}
