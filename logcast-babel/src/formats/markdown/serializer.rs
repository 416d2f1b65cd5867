//! Markdown serialization (records → pipe table)

use crate::common::columns;
use crate::options::RenderOptions;
use logcast_record::{timestamp, Record};

pub fn serialize_records(records: &[Record], options: &RenderOptions) -> String {
    let extra = columns::property_columns(records);
    let headers = columns::header_columns(records);

    let mut output = String::new();
    output.push_str(&format!("| {} |\n", headers.join(" | ")));
    output.push_str(&format!(
        "| {} |\n",
        headers
            .iter()
            .map(|_| "---")
            .collect::<Vec<_>>()
            .join(" | ")
    ));

    for record in records {
        let level_cell = if options.use_color {
            format!(
                "<span style=\"color:{}\">{}</span>",
                record.level_color(),
                record.level
            )
        } else {
            record.level.clone()
        };

        let mut row = vec![
            timestamp::to_display_string(&record.timestamp),
            level_cell,
            record.message.clone(),
            record.exception.clone().unwrap_or_default(),
            record.event_id.clone().unwrap_or_default(),
        ];
        for key in &extra {
            row.push(
                record
                    .properties
                    .get(key)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        output.push_str(&format!("| {} |\n", row.join(" | ")));
    }

    output
}
