//! Multi-format interoperability for log records
//!
//!     This crate provides a uniform interface for converting log batches
//!     between textual encodings. Four formats parse into the normalized
//!     [`Record`] shape (JSON, CSV, XML, free-form text) and five render
//!     from it (Markdown, HTML, JSON, XML, CSV), with presentation behavior
//!     (coloring, folding, grouping, summarization) driven by
//!     [`RenderOptions`].
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (parsing and/or
//!       serialization)
//!     - FormatRegistry: centralized discovery and selection of formats,
//!       by tag or by file extension
//!     - Format implementations: concrete implementations for each format
//!     - convert module: the façade the callers actually use
//!
//!     This is a pure lib: it powers logcast-cli but is shell agnostic. A
//!     conversion is a single-threaded pure transformation: the whole input
//!     is materialized in memory and nothing is shared between calls.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── options.rs              # RenderOptions
//!     ├── convert.rs              # conversion façade
//!     ├── common
//!     │   ├── columns.rs          # shared header/column collection
//!     │   └── escape.rs           # per-format escaping rules
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # parser implementation
//!     │   │   ├── serializer.rs   # serializer implementation
//!     │   │   └── mod.rs
//!     └── lib.rs
//!
//! Error model
//!
//!     Unknown tags, unknown extensions and syntactically broken JSON/XML
//!     documents fail the whole call. Field-level issues never do: a bad
//!     timestamp becomes the sentinel minimum, an unparseable property value
//!     stays a string, a missing optional field stays absent. There is no
//!     partial-success channel.
//!
//! Known asymmetries (kept deliberately, see the module docs)
//!
//!     - The CSV parser splits on raw commas and does not unescape quoted
//!       fields, while the CSV serializer quotes on write. Round-tripping
//!       delimiter-containing text through CSV is lossy.
//!     - HTML group headers trigger on adjacent value changes only; unsorted
//!       input repeats groups.

pub mod common;
pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod options;
pub mod registry;

pub use convert::{convert, convert_file, convert_to_bytes, parse_file, parse_str};
pub use error::FormatError;
pub use format::Format;
pub use options::RenderOptions;
pub use registry::FormatRegistry;

pub use logcast_record::{Record, PropertyValue};
