//! Timestamp handling shared by all parsers and renderers.
//!
//! Records that never saw a timestamp carry a sentinel minimum value rather
//! than an `Option`; renderers print whatever is stored without branching.
//! Parsing tries the strict round-trip form (RFC 3339, offset preserved)
//! before falling back to the lenient local forms, which are assumed UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};

/// Lenient fallback forms accepted after strict RFC 3339 parsing fails.
const LENIENT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// The sentinel "unset" timestamp: the minimum representable instant.
pub fn unset() -> DateTime<FixedOffset> {
    DateTime::<Utc>::MIN_UTC.fixed_offset()
}

/// Whether a timestamp is the sentinel produced by [`unset`].
pub fn is_unset(ts: &DateTime<FixedOffset>) -> bool {
    *ts == unset()
}

/// Parse a timestamp, strict round-trip format first, then lenient fallbacks.
///
/// Returns `None` when nothing matches; callers decide between keeping their
/// current value and substituting the sentinel.
pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    for format in LENIENT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    None
}

/// Fully round-trippable rendering: RFC 3339 with offset and microseconds.
pub fn to_roundtrip_string(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Human-oriented rendering used by the Markdown and HTML tables.
pub fn to_display_string(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let ts = parse("2025-04-24T10:00:00+03:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(to_display_string(&ts), "2025-04-24 10:00:00");
    }

    #[test]
    fn test_parse_lenient_space_separated() {
        let ts = parse("2025-04-24 10:00:00").unwrap();
        assert_eq!(to_roundtrip_string(&ts), "2025-04-24T10:00:00.000000Z");
    }

    #[test]
    fn test_parse_lenient_with_fraction() {
        let ts = parse("2025-04-24T10:00:00.250").unwrap();
        assert_eq!(to_roundtrip_string(&ts), "2025-04-24T10:00:00.250000Z");
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse("not a date").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn test_roundtrip_through_strict_format() {
        let ts = parse("2025-04-24 10:00:00").unwrap();
        let rendered = to_roundtrip_string(&ts);
        assert_eq!(parse(&rendered).unwrap(), ts);
    }

    #[test]
    fn test_unset_is_detectable() {
        assert!(is_unset(&unset()));
        assert!(!is_unset(&parse("2025-04-24 10:00:00").unwrap()));
    }
}
