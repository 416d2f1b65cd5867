//! HTML serialization (records → standalone report)
//!
//! The stylesheet ships with the crate and is embedded with `include_str!`
//! when the styles option is on. The summary banner buckets every level that
//! is not exactly ERROR or WARN into the info count (info = total minus
//! errors minus warnings). Group headers are adjacent-run only: a header row is inserted
//! whenever the grouping property's value differs from the previous record's,
//! with no sorting beforehand.

use crate::common::columns;
use crate::common::escape::escape_markup;
use crate::options::RenderOptions;
use logcast_record::{timestamp, Record};

pub fn serialize_records(records: &[Record], options: &RenderOptions) -> String {
    let total = records.len();
    let error_count = records.iter().filter(|r| r.level_is("ERROR")).count();
    let warn_count = records.iter().filter(|r| r.level_is("WARN")).count();
    let info_count = total - error_count - warn_count;

    let extra = columns::property_columns(records);
    let headers = columns::header_columns(records);

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head><meta charset=\"utf-8\"><title>Log Report</title>\n");
    if options.include_styles {
        output.push_str("<style>\n");
        output.push_str(include_str!("../../../css/report.css"));
        output.push_str("</style>\n");
    }
    output.push_str("</head><body>\n");

    if options.enable_summary {
        output.push_str(&format!(
            "<div class=\"summary\">Total: {total} &nbsp; \
<span style=\"color:red;\">Errors: {error_count}</span> \
<span style=\"color:orange;\">Warnings: {warn_count}</span> \
<span style=\"color:green;\">Info: {info_count}</span></div>\n"
        ));
    }

    output.push_str("<table>\n<thead><tr>");
    for header in &headers {
        output.push_str(&format!("<th>{}</th>", escape_markup(header)));
    }
    output.push_str("</tr></thead>\n<tbody>\n");

    let mut current_group: Option<String> = None;
    for record in records {
        if let Some(key) = options.group_by_property.as_deref() {
            if let Some(value) = record.properties.get(key) {
                let group = value.to_string();
                if current_group.as_deref() != Some(group.as_str()) {
                    output.push_str(&format!(
                        "<tr class=\"group-header\"><th colspan=\"{}\">{}: {}</th></tr>\n",
                        headers.len(),
                        escape_markup(key),
                        escape_markup(&group)
                    ));
                    current_group = Some(group);
                }
            }
        }

        output.push_str(&format!(
            "<tr class=\"{}\">\n",
            escape_markup(&record.level.to_lowercase())
        ));
        output.push_str(&format!(
            "<td>{}</td>\n",
            timestamp::to_display_string(&record.timestamp)
        ));
        if options.use_color {
            output.push_str(&format!(
                "<td style=\"color:{}\">{}</td>\n",
                record.level_color(),
                escape_markup(&record.level)
            ));
        } else {
            output.push_str(&format!("<td>{}</td>\n", escape_markup(&record.level)));
        }
        output.push_str(&folding_cell(&record.message, options, None));
        output.push_str(&folding_cell(
            record.exception.as_deref().unwrap_or(""),
            options,
            Some("Details"),
        ));
        output.push_str(&format!(
            "<td>{}</td>\n",
            escape_markup(record.event_id.as_deref().unwrap_or(""))
        ));
        for key in &extra {
            let value = record
                .properties
                .get(key)
                .map(|v| v.to_string())
                .unwrap_or_default();
            output.push_str(&format!("<td>{}</td>\n", escape_markup(&value)));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</tbody></table>\n</body></html>\n");
    output
}

/// A table cell that folds behind a disclosure widget when the escaped text
/// exceeds the configured threshold. The message summary is a truncated
/// preview; the exception summary is a fixed label.
fn folding_cell(text: &str, options: &RenderOptions, fixed_summary: Option<&str>) -> String {
    let escaped = escape_markup(text);
    if options.fold_long_messages && escaped.chars().count() > options.fold_message_length {
        let summary = match fixed_summary {
            Some(label) => label.to_string(),
            None => {
                let head: String = escaped.chars().take(options.fold_message_length).collect();
                format!("{head}…")
            }
        };
        format!("<td><details><summary>{summary}</summary><pre>{escaped}</pre></details></td>\n")
    } else {
        format!("<td>{escaped}</td>\n")
    }
}
