//! Biblioscape tag-file import
//!
//! Biblioscape exports records as `--XX-- value` lines terminated by
//! `------`. Several Biblioscape fields are ignored; others only survive in
//! the BibTeX `comment` field.

mod assembler;
mod mapper;
mod types;

use std::collections::BTreeSet;
use std::io::BufRead;

pub use assembler::assemble;
pub use mapper::{is_remote_link, map_record, rule_for, MappedRecord, TagRule};
pub use types::{classify_hint, infer_entry_type, EntryType, HintSlot, TypeHints};

use crate::entry::BibEntry;
use crate::error::ImportError;
use crate::format::{ImportFormat, ParseOutcome};
use crate::tagfile::{self, RawRecord};

/// Importer for Biblioscape tag files
#[derive(Debug, Clone, Copy, Default)]
pub struct BiblioscapeImporter;

impl BiblioscapeImporter {
    pub fn new() -> Self {
        Self
    }

    /// Convert one raw record into a canonical entry
    pub fn convert(record: &RawRecord) -> BibEntry {
        let mapped = map_record(record);
        let entry_type = infer_entry_type(&mapped.hints);
        assemble(mapped, entry_type)
    }
}

impl ImportFormat for BiblioscapeImporter {
    fn format_name(&self) -> &str {
        "Biblioscape"
    }

    fn description(&self) -> &str {
        "Imports a Biblioscape Tag File.\n\
         Several Biblioscape field types are ignored. Others are only included in the BibTeX field \"comment\"."
    }

    fn recognized_extensions(&self) -> BTreeSet<String> {
        BTreeSet::from([".txt".to_string()])
    }

    /// Biblioscape files carry no magic marker, so every input is accepted
    /// without reading from it.
    fn is_recognized(&self, _reader: &mut dyn BufRead) -> Result<bool, ImportError> {
        Ok(true)
    }

    fn import(&self, reader: &mut dyn BufRead) -> ParseOutcome {
        let records = tagfile::parse_reader(reader)?;
        let entries: Vec<BibEntry> = records.iter().map(Self::convert).collect();
        tracing::debug!("Imported {} Biblioscape entries", entries.len());
        Ok(entries)
    }
}
