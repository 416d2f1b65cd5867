//! Per-format escaping rules.

/// Escape markup special characters for HTML and XML text content.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Standard CSV quoting: wrap in double quotes and double any embedded quote
/// when the field contains a comma or quote. Other fields pass through.
///
/// The CSV parser deliberately does not undo this (naive comma split), so
/// delimiter-containing fields do not round-trip. Documented asymmetry.
pub fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
