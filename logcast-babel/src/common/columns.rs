//! Header/column collection for the tabular formats.
//!
//! Every tabular output (Markdown, HTML, CSV) shows the same column set: the
//! five standard fields in fixed order, then the union of all property keys
//! across the batch in first-seen order. First-seen order is a testable
//! contract, which is why collection goes through an insertion-ordered set.

use indexmap::IndexSet;
use logcast_record::Record;

/// The five standard columns, in their fixed order.
pub const STANDARD_COLUMNS: [&str; 5] = ["Timestamp", "Level", "Message", "Exception", "EventId"];

/// Union of all property keys across the batch, first-seen order, deduplicated.
pub fn property_columns(records: &[Record]) -> Vec<String> {
    let mut keys: IndexSet<String> = IndexSet::new();
    for record in records {
        for key in record.properties.keys() {
            keys.insert(key.clone());
        }
    }
    keys.into_iter().collect()
}

/// Full header row: standard columns followed by the property columns.
pub fn header_columns(records: &[Record]) -> Vec<String> {
    STANDARD_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(property_columns(records))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcast_record::PropertyValue;

    fn record_with_keys(keys: &[&str]) -> Record {
        let mut record = Record::default();
        for key in keys {
            record
                .properties
                .insert(key.to_string(), PropertyValue::Int(1));
        }
        record
    }

    #[test]
    fn test_property_columns_first_seen_order() {
        let records = vec![
            record_with_keys(&["host", "region"]),
            record_with_keys(&["region", "user"]),
            record_with_keys(&["host"]),
        ];
        assert_eq!(property_columns(&records), vec!["host", "region", "user"]);
    }

    #[test]
    fn test_header_starts_with_standard_columns() {
        let records = vec![record_with_keys(&["a"])];
        let header = header_columns(&records);
        assert_eq!(
            header,
            vec!["Timestamp", "Level", "Message", "Exception", "EventId", "a"]
        );
    }

    #[test]
    fn test_empty_batch_has_only_standard_columns() {
        assert_eq!(header_columns(&[]).len(), STANDARD_COLUMNS.len());
    }
}
