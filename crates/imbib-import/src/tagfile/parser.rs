//! Tag-file parser implementation
//!
//! Line kinds, checked in this order:
//! - empty line: skipped
//! - `------`: closes the current record
//! - `--XX-- text`: opens field `XX` with `text`
//! - anything else: continuation, trimmed and appended to the open field

use std::borrow::Cow;
use std::io::BufRead;

use lazy_static::lazy_static;
use regex::Regex;

use super::record::RawRecord;
use crate::error::ImportError;

/// Line that terminates a record
pub const RECORD_DELIMITER: &str = "------";

lazy_static! {
    /// `--` marker, two-character tag, `-- ` marker, initial text
    static ref FIELD_LINE: Regex = Regex::new(r"^--(.{2})-- (.*)$").unwrap();
}

/// Push-style tag-file parser
///
/// Feed physical lines in order with [`feed_line`](Self::feed_line), then call
/// [`finish`](Self::finish). The first structural error poisons the whole
/// input; callers should stop feeding and discard the parser.
#[derive(Debug, Default)]
pub struct TagFileParser {
    current: RawRecord,
    /// Index of the field that continuation lines extend
    open_field: Option<usize>,
    records: Vec<RawRecord>,
    line_number: usize,
}

impl TagFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one physical line (without its line terminator)
    pub fn feed_line(&mut self, line: &str) -> Result<(), ImportError> {
        self.line_number += 1;

        if line.is_empty() {
            return Ok(());
        }

        if line == RECORD_DELIMITER {
            let record = std::mem::take(&mut self.current);
            tracing::debug!(
                "Tag-file record {} closed at line {} with {} fields",
                self.records.len() + 1,
                self.line_number,
                record.len()
            );
            self.records.push(record);
            self.open_field = None;
            return Ok(());
        }

        if let Some(caps) = FIELD_LINE.captures(line) {
            let index = self.current.open_field(&caps[1], &caps[2]);
            self.open_field = Some(index);
            return Ok(());
        }

        match self.open_field {
            Some(index) => {
                self.current.append_to(index, line.trim());
                Ok(())
            }
            None => {
                tracing::warn!(
                    "Continuation line {} has no open field; rejecting input ({} records discarded)",
                    self.line_number,
                    self.records.len()
                );
                Err(ImportError::Structural {
                    line: self.line_number,
                })
            }
        }
    }

    /// Finish parsing and return the completed records.
    ///
    /// A trailing record without a closing delimiter is dropped.
    pub fn finish(self) -> Vec<RawRecord> {
        if !self.current.is_empty() {
            tracing::debug!(
                "Dropping unterminated trailing record with {} fields",
                self.current.len()
            );
        }
        self.records
    }
}

/// Parse a whole tag file held in memory
pub fn parse_str(input: &str) -> Result<Vec<RawRecord>, ImportError> {
    parse_reader(&mut input.as_bytes())
}

/// Parse a tag file line by line from a reader.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
/// decode to U+FFFD instead of failing the import.
pub fn parse_reader<R: BufRead + ?Sized>(reader: &mut R) -> Result<Vec<RawRecord>, ImportError> {
    let mut parser = TagFileParser::new();
    let mut chunk = Vec::new();
    let mut lossy_lines = 0usize;
    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }
        for line in split_line_breaks(&chunk) {
            let line = String::from_utf8_lossy(line);
            if matches!(line, Cow::Owned(_)) {
                lossy_lines += 1;
            }
            parser.feed_line(&line)?;
        }
    }
    if lossy_lines > 0 {
        tracing::debug!(
            "Replaced invalid UTF-8 on {} tag-file line(s)",
            lossy_lines
        );
    }
    Ok(parser.finish())
}

/// Lines of a chunk that ends with at most one `\n`
fn split_line_breaks(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}
