//! Canonical entry produced by the importers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier given to freshly imported entries. Cite keys are assigned
/// later by the library, not by the importer.
pub const DEFAULT_ENTRY_ID: &str = "__ID";

/// Canonical (BibTeX vocabulary) field names written by the importers.
pub mod fields {
    pub const ABSTRACT: &str = "abstract";
    pub const ADDRESS: &str = "address";
    pub const ANNOTE: &str = "annote";
    pub const AUTHOR: &str = "author";
    pub const BOOKTITLE: &str = "booktitle";
    pub const CHAPTER: &str = "chapter";
    pub const COMMENT: &str = "comment";
    pub const EDITION: &str = "edition";
    pub const ISBN: &str = "isbn";
    pub const JOURNAL: &str = "journal";
    pub const KEYWORDS: &str = "keywords";
    pub const LANGUAGE: &str = "language";
    pub const NOTE: &str = "note";
    pub const NUMBER: &str = "number";
    pub const PAGES: &str = "pages";
    pub const PDF: &str = "pdf";
    pub const PUBLISHER: &str = "publisher";
    pub const TITLE: &str = "title";
    pub const URL: &str = "url";
    pub const VOLUME: &str = "volume";
    pub const YEAR: &str = "year";
}

/// An imported bibliographic entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    pub id: String,
    /// Lowercase BibTeX type name, e.g. `"article"`
    pub entry_type: String,
    pub fields: BTreeMap<String, String>,
}

impl BibEntry {
    /// Create an entry with the placeholder id and no fields
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            id: DEFAULT_ENTRY_ID.to_string(),
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Set every field of `fields`
    pub fn set_fields(&mut self, fields: BTreeMap<String, String>) {
        self.fields.extend(fields);
    }

    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_field(fields::TITLE)
    }

    pub fn author(&self) -> Option<&str> {
        self.get_field(fields::AUTHOR)
    }

    pub fn year(&self) -> Option<&str> {
        self.get_field(fields::YEAR)
    }

    pub fn journal(&self) -> Option<&str> {
        self.get_field(fields::JOURNAL)
    }

    pub fn pages(&self) -> Option<&str> {
        self.get_field(fields::PAGES)
    }
}
