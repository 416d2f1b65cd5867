//! Format implementations.

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;
pub mod text;
pub mod xml;

pub use csv::CsvFormat;
pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
pub use xml::XmlFormat;
