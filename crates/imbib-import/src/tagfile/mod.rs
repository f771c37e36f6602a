//! Tag-file parsing
//!
//! Tag files announce each field on its own line and fold long values over
//! several physical lines:
//!
//! ```text
//! --AU-- Smith, John
//! --TI-- A very long title that the exporter
//!     wrapped onto a second line
//! ------
//! ```
//!
//! The parser only reconstructs `(tag, text)` records; turning tags into
//! canonical fields is the job of a format-specific mapper.

mod parser;
mod record;

pub use parser::{parse_reader, parse_str, TagFileParser, RECORD_DELIMITER};
pub use record::{RawField, RawRecord};
