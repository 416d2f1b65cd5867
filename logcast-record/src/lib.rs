//! logcast-record: the normalized log record model.
//!
//! Every input format (JSON, CSV, XML, free-form text) is parsed into the
//! same [`Record`] shape, and every output format renders from it. The
//! record is the one contract both halves of the converter agree on, so
//! this crate has no knowledge of any concrete format.
//!
//! A record carries five standard fields (timestamp, level, message,
//! exception, event id) plus an open, insertion-ordered property map.
//! Property order is a visible contract: it decides output column order
//! in the tabular formats.
//!
//! Field-level rules live here too: the timestamp sentinel and its
//! strict-then-lenient parsing, the int → bool → string coercion for
//! property values, and the severity → color mapping.

pub mod record;
pub mod timestamp;
pub mod value;

pub use record::Record;
pub use value::PropertyValue;
