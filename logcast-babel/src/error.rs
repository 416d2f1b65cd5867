//! Errors surfaced by the conversion layer.
//!
//! Only whole-call failures live here. Field-level problems are recovered
//! locally with fallback values and never become errors.

use std::fmt;

/// Error that can occur during parsing, rendering or format dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Output format tag not present in the registry
    FormatNotFound(String),
    /// Input format tag or file extension with no registered parser
    UnsupportedInput(String),
    /// Syntactically invalid container document (JSON/XML)
    MalformedInput(String),
    /// Format exists but lacks the requested direction
    NotSupported(String),
    /// Error during serialization
    SerializationError(String),
    /// Failure reading the input at the file boundary
    Io(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::UnsupportedInput(what) => write!(f, "Unsupported input format: {what}"),
            FormatError::MalformedInput(msg) => write!(f, "Malformed input: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "{msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
