//! JSON serialization (records → pretty-printed JSON array)
//!
//! Two escaping modes. The conservative default writes non-ASCII and
//! HTML-sensitive characters (`<`, `>`, `&`, `'`) as `\uXXXX` so the output
//! can be embedded anywhere; the relaxed mode leaves them as-is. The mode is
//! selected by the color option, a quirk carried over from the original
//! options layout.

use crate::error::FormatError;
use crate::options::RenderOptions;
use logcast_record::Record;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

pub fn serialize_records(
    records: &[Record],
    options: &RenderOptions,
) -> Result<String, FormatError> {
    let mut output = Vec::new();
    if options.use_color {
        let mut serializer = Serializer::with_formatter(&mut output, PrettyFormatter::new());
        records
            .serialize(&mut serializer)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    } else {
        let mut serializer = Serializer::with_formatter(&mut output, ConservativeFormatter::new());
        records
            .serialize(&mut serializer)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    }
    String::from_utf8(output).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Pretty formatter that additionally escapes non-ASCII and HTML-sensitive
/// characters as `\uXXXX` (astral characters as surrogate pairs).
struct ConservativeFormatter {
    inner: PrettyFormatter<'static>,
}

impl ConservativeFormatter {
    fn new() -> Self {
        ConservativeFormatter {
            inner: PrettyFormatter::new(),
        }
    }
}

fn needs_unicode_escape(ch: char) -> bool {
    !ch.is_ascii() || matches!(ch, '<' | '>' | '&' | '\'')
}

fn write_unicode_escape<W: ?Sized + io::Write>(writer: &mut W, ch: char) -> io::Result<()> {
    let code = ch as u32;
    if code < 0x10000 {
        write!(writer, "\\u{code:04x}")
    } else {
        let reduced = code - 0x10000;
        let high = 0xd800 + (reduced >> 10);
        let low = 0xdc00 + (reduced & 0x3ff);
        write!(writer, "\\u{high:04x}\\u{low:04x}")
    }
}

impl serde_json::ser::Formatter for ConservativeFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        // Fragments never contain quotes, backslashes or control characters;
        // serde_json routes those through write_char_escape.
        for ch in fragment.chars() {
            if needs_unicode_escape(ch) {
                write_unicode_escape(writer, ch)?;
            } else {
                writer.write_all(&[ch as u8])?;
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
